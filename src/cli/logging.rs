use tracing::level_filters::LevelFilter;

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "TX_LEDGER_LOG";

/// Map a level name to a filter
///
/// Names are case-insensitive. Anything unrecognized falls back to `error`
/// with a notice on stderr.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::trace("trace", LevelFilter::TRACE)]
    #[case::debug("debug", LevelFilter::DEBUG)]
    #[case::info("info", LevelFilter::INFO)]
    #[case::warn("warn", LevelFilter::WARN)]
    #[case::error("error", LevelFilter::ERROR)]
    #[case::uppercase("WARN", LevelFilter::WARN)]
    #[case::padded(" debug ", LevelFilter::DEBUG)]
    #[case::unknown("verbose", LevelFilter::ERROR)]
    #[case::empty("", LevelFilter::ERROR)]
    fn test_parse_log_level(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_log_level(input), expected);
    }
}
