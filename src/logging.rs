use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// `<data_local_dir>/grid-snake/grid-snake.log`, or the working directory
/// when the platform has no data dir.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Builds the filter from a `RUST_LOG`-style directive string, falling back to `info`
/// when it is absent or empty. Invalid directives are skipped.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Installs the global subscriber writing to `path`.
///
/// Logs go to a file: the terminal belongs to the game.
pub fn init(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    use super::env_filter;

    fn enabled_under(directives: Option<&str>, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(env_filter(directives));
        tracing::subscriber::with_default(subscriber, || match level {
            Level::TRACE => tracing::enabled!(Level::TRACE),
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            _ => tracing::enabled!(Level::ERROR),
        })
    }

    #[test]
    fn unset_directives_default_to_info() {
        assert!(enabled_under(None, Level::INFO));
        assert!(!enabled_under(None, Level::DEBUG));
    }

    #[test]
    fn rust_log_can_raise_verbosity() {
        assert!(enabled_under(Some("debug"), Level::DEBUG));
        assert!(!enabled_under(Some("debug"), Level::TRACE));
    }

    #[test]
    fn rust_log_can_lower_verbosity() {
        assert!(enabled_under(Some("warn"), Level::WARN));
        assert!(!enabled_under(Some("warn"), Level::INFO));
    }

    #[test]
    fn empty_directives_default_to_info() {
        assert!(enabled_under(Some(""), Level::INFO));
        assert!(!enabled_under(Some(""), Level::DEBUG));
    }
}
