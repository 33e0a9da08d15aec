// Code shape
pub const CODE_LENGTH: usize = 5;
pub const DIGIT_RADIX: u8 = 10;

// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

// Terminal loop
pub const TICK_INTERVAL_MS: u64 = 50;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
