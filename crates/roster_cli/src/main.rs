//! CLI entry point for the roster record store.
//!
//! # Responsibility
//! - Open (or create) the record store and report its row totals.
//! - Verify `roster_core` wiring independently of the desktop shell.
//!
//! Usage: `roster_cli [db_path]`. `ROSTER_LOG_DIR`, `ROSTER_LOG_LEVEL` and
//! `ROSTER_INTEGRITY` are read from the environment.

use log::info;
use roster_core::{
    core_version, default_log_level, init_logging, RecordStore, ReferentialIntegrity,
    RosterService, StoreConfig, DEFAULT_DB_FILE_NAME,
};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = env::var("ROSTER_LOG_DIR") {
        let level =
            env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let integrity = match env::var("ROSTER_INTEGRITY") {
        Ok(value) => match value.parse::<ReferentialIntegrity>() {
            Ok(mode) => mode,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => ReferentialIntegrity::default(),
    };

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE_NAME.to_string());
    let config = StoreConfig::file(&path).with_integrity(integrity);

    let store = match RecordStore::open_with_config(&config) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match RosterService::for_store(&store).summary() {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("failed to read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("roster_core version={}", core_version());
    println!("store={path} integrity={integrity}");
    println!(
        "students={} exams={} assignments={}",
        summary.students, summary.exams, summary.assignments
    );
    info!("event=app_stop module=roster_cli status=ok");
    ExitCode::SUCCESS
}
