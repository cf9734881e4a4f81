// Event loop timing
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

// Display defaults (overridable from config.toml)
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_FINAL_LABEL: &str = "Final Question";

// Reveal dialog hints
pub const HINT_REVEAL: &str = "Press Enter to reveal answer";
pub const HINT_CLOSE: &str = "Press Enter to close";

// File layout under the config/data directories
pub const APP_DIR_NAME: &str = "trivia";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const GAMES_DIR_NAME: &str = "games";
pub const LOG_FILE_NAME: &str = "trivia.log";
pub const GAME_FILE_EXTENSION: &str = "json";
