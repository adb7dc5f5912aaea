use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging, including async-graphql's resolver spans
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over the verbose flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact();

    // Only the file records span close events, which carry how long each
    // resolver span from the Tracing extension took.
    let file_layer = log_file.map(|path| {
        fmt::layer()
            .with_writer(file_appender(&path))
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

/// Daily-rotated appender in the log file's directory.
fn file_appender(log_path: &Path) -> RollingFileAppender {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(dir);

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("blogql.log"));
    tracing_appender::rolling::daily(dir, file_name)
}

/// Our own crate at the requested level; async-graphql's resolver spans only
/// when verbose.
fn default_directive(verbose: bool) -> String {
    if verbose {
        "blogql=debug,async_graphql=debug".to_string()
    } else {
        "blogql=info".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "blogql=info");
        assert!(default_directive(true).starts_with("blogql=debug"));
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("blogql.log");

        let _appender = file_appender(&log_path);
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }
}
