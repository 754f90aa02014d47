/// Environment variable prefix for configuration keys
pub const ENV_PREFIX: &str = "NULLVAL";
/// Separator between the prefix and each nested key
pub const ENV_SEPARATOR: &str = "__";

/// Config section holding the interval parser settings
pub const INTERVAL_SECTION: &str = "interval";

/// Config key of `interval.allow_empty_time`
pub const ALLOW_EMPTY_TIME_KEY: &str =
    const_str::concat!(INTERVAL_SECTION, ".", "allow_empty_time");

/// Environment variable overriding [`ALLOW_EMPTY_TIME_KEY`]
pub const ENV_ALLOW_EMPTY_TIME: &str = const_str::concat!(
    ENV_PREFIX,
    ENV_SEPARATOR,
    "INTERVAL",
    ENV_SEPARATOR,
    "ALLOW_EMPTY_TIME"
);

/// Optional config file, looked up relative to the working directory
pub const CONFIG_FILE: &str = "nullval.toml";

/// Canonical text of the zero duration.
pub const ZERO_INTERVAL_TEXT: &str = "PT0S";
