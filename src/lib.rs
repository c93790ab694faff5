//! moodj - Mood journal
//!
//! Records a daily mood with an optional note and weather snapshot, keeps
//! entries in a local key-value store, and derives filtered listings,
//! monthly mood distributions and CSV exports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjError;
