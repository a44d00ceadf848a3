use std::fs::OpenOptions;
use std::path::PathBuf;

const LOG_FILTER_VAR: &str = "RUST_LOG";
const LOG_FILE_VAR: &str = "TRACKER_LOG_FILE";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "tracker-terminal-ui.log";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            log_filter: non_empty(LOG_FILTER_VAR)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_file: non_empty(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)),
        }
    }

    /// Sends `log` output to the configured file. The terminal is owned by
    /// the UI, so nothing is written to stderr.
    pub fn init_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        env_logger::Builder::new()
            .parse_filters(&self.log_filter)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()?;
        Ok(())
    }
}
