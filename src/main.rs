use chrono::Utc;
use clap::Parser;
use moodj::application::{ConfigService, ExportService, InitService, JournalSession, NewEntry};
use moodj::cli::{format_entry_list, format_mood_list, format_trends, Cli, Commands};
use moodj::domain::{EntryFilter, TimeReference, TimeZonePolicy, WeatherSnapshot};
use moodj::error::MoodjError;
use moodj::infrastructure::FileSystemRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MOODJ_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), MoodjError> {
    match cli.command {
        Some(Commands::Init { path, timezone }) => {
            let timezone: TimeZonePolicy = timezone.parse()?;
            InitService::execute(&path, timezone)?;

            println!("Initialized moodj journal at {}", path.display());
            println!("Timezone: {}", timezone);
            Ok(())
        }
        Some(Commands::Add {
            mood,
            note,
            at,
            temp,
            condition,
            city,
        }) => {
            let when = at.as_deref().map(TimeReference::parse).transpose()?;
            let weather = match (temp, condition, city) {
                (Some(temp), Some(condition), Some(city)) => {
                    Some(WeatherSnapshot::from_reading(temp, condition, city)?)
                }
                _ => None,
            };

            let repo = FileSystemRepository::discover()?;
            let mut session = JournalSession::open(&repo)?;
            let entry = session.add(
                NewEntry {
                    mood,
                    note,
                    when,
                    weather,
                },
                Utc::now(),
            )?;

            println!("Entry saved successfully!");
            print!("{}", format_entry_list(&[&entry], session.config().timezone));
            Ok(())
        }
        Some(Commands::List { mood }) => {
            let filter: EntryFilter = mood.parse()?;
            let repo = FileSystemRepository::discover()?;
            let session = JournalSession::open(&repo)?;

            let entries = session.list(filter);
            let output = format_entry_list(&entries, session.config().timezone);
            if entries.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Some(Commands::Trends) => {
            let repo = FileSystemRepository::discover()?;
            let session = JournalSession::open(&repo)?;

            let trends = session.trends();
            let output = format_trends(trends.as_deref());
            if trends.is_none() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Some(Commands::Export { output, stdout }) => {
            let repo = FileSystemRepository::discover()?;
            let session = JournalSession::open(&repo)?;

            if stdout {
                print!("{}", session.export_csv());
                return Ok(());
            }

            let path = match output {
                Some(path) => path,
                None => ExportService::default_path(&std::env::current_dir()?),
            };
            let count = ExportService::execute(&session, &path)?;
            println!("Exported {} entries to {}", count, path.display());
            Ok(())
        }
        Some(Commands::Moods) => {
            print!("{}", format_mood_list());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("timezone = {}", config.timezone);
                println!("trend_order = {}", config.trend_order);
                println!("csv_quoting = {}", config.csv_quoting);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodj config [--list | <key> [<value>]]");
                println!("Valid keys: timezone, trend_order, csv_quoting, created");
                Ok(())
            }
        }
        None => {
            println!("moodj - Mood journal with weather and monthly trends");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
