use assert_cmd::Command;
use std::path::Path;

pub fn moodj_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodj").unwrap();
    cmd.env_remove("MOODJ_ROOT");
    cmd.env_remove("MOODJ_LOG");
    cmd
}

/// Initialize a UTC journal so dates in assertions don't depend on the host zone
#[allow(dead_code)]
pub fn init_utc_journal(path: &Path) {
    moodj_cmd()
        .arg("init")
        .arg(path)
        .arg("--timezone")
        .arg("utc")
        .assert()
        .success();
}
