pub const GROUP_COLLECTION: &str = "@teamroster:groups";
pub const PLAYER_COLLECTION: &str = "@teamroster:players";
pub const KEY_SEPARATOR: char = '/';
pub const STORE_FILE_EXTENSION: &str = "json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "teamroster.log";
pub const BASE_DIR_NAME: &str = ".teamroster";
pub const BASE_DIR_ENV_VAR: &str = "TEAMROSTER_HOME";
pub const DEFAULT_TEAMS: [&str; 2] = ["Time A", "Time B"];
