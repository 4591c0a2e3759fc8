use tracing_subscriber::{
    Layer,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Initialize logging to `stderr`.
///
/// Log levels are set by the following, in order of precedence:
/// * `log_level`
/// * The `RUST_LOG` environment variable
/// * `DEFAULT_LOG_LEVEL`
///
/// **Note:** Malformed values will result in no logs.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logs<S: AsRef<str>>(log_level: Option<S>) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(log_level));

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

/// Creates a filter with the value of `log_level` if it is `Some`, or the `RUST_LOG` environment
/// variable if it is `None`, or `DEFAULT_LOG_LEVEL` if neither of the previous have a value.
fn filter<S: AsRef<str>>(log_level: Option<S>) -> EnvFilter {
    // lossy means if the value is malformed, filter out everything
    match log_level {
        Some(log_level) => EnvFilter::builder().parse_lossy(log_level),
        None => EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .from_env_lossy(),
    }
}
