//! Tracing setup
//!
//! The UI owns the terminal, so log output only goes to a file chosen on the
//! command line. Without one no subscriber is installed.

use crate::config::LOG_LEVEL_ENV_VAR;
use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const DEFAULT_LEVEL: &str = "error";

/// Dependency targets that are only interesting when something breaks
const NOISY_TARGETS: [&str; 8] = [
    "reqwest", "hyper", "hyper_util", "h2", "rustls", "tokio", "tower", "mio",
];

/// Filter from `STORELINE_LOG_LEVEL`, with dependency noise capped at warn
pub fn build_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    for target in NOISY_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Install the global subscriber writing to `log_file`
pub fn init_tracing_subscriber(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter()?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow!("cannot install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_should_accept_noisy_directives() {
        let filter = build_filter().unwrap();
        let rendered = filter.to_string();

        assert!(rendered.contains("reqwest=warn"));
        assert!(rendered.contains("rustls=warn"));
    }

    #[test]
    fn open_log_file_should_create_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storeline.log");

        open_log_file(&path).unwrap();
        std::fs::write(&path, "first\n").unwrap();
        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_should_fail_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("storeline.log");

        assert!(open_log_file(&path).is_err());
    }

    #[test]
    fn no_log_file_should_install_nothing() {
        assert!(init_tracing_subscriber(None).is_ok());
    }
}
