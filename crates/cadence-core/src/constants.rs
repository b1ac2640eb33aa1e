/// Name shared by the binary, the config file and the environment prefix
pub const APP_NAME: &str = "cadence";
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");
pub const ENV_PREFIX: &str = "CADENCE";

/// Days before "today" used to open the override date picker window.
pub const DEFAULT_OVERRIDE_PAST_DAYS: i64 = 90;
/// Days after "today" used to close the override date picker window.
pub const DEFAULT_OVERRIDE_FUTURE_DAYS: i64 = 217;

/// Monday, as a weekday index (Monday=0 … Sunday=6).
pub const DEFAULT_WEEK_START: u8 = 0;
