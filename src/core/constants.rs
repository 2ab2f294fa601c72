// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const BASE_CAST_DURATION_MS: u64 = 3000;
pub const CAST_DURATION_PER_POWER_MS: u64 = 20;
pub const MIN_CAST_DURATION_MS: u64 = 200;
pub const LANDED_DISPLAY_MS: u64 = 3000;

// Cast power
pub const MAX_CAST_POWER: u8 = 100;
pub const PROGRESS_COMPLETE: f64 = 100.0;

// Rarity upgrade brackets: (roll below, power above)
pub const LEGENDARY_ROLL_THRESHOLD: f64 = 0.05;
pub const LEGENDARY_POWER_THRESHOLD: u8 = 80;
pub const EPIC_ROLL_THRESHOLD: f64 = 0.15;
pub const EPIC_POWER_THRESHOLD: u8 = 60;
pub const RARE_ROLL_THRESHOLD: f64 = 0.35;
pub const RARE_POWER_THRESHOLD: u8 = 40;

// Value and size formulas
pub const SIZE_MULTIPLIER_BASE: f64 = 0.5;
pub const BASE_FISH_SIZE_CM: f64 = 20.0;
pub const SIZE_CM_PER_POWER: f64 = 2.0;
pub const SIZE_JITTER_CM: f64 = 30.0;

// Player economy
pub const STARTING_COINS: u64 = 150;
pub const STARTING_LEVEL: u32 = 1;

// Social
pub const MAX_CHAT_MESSAGES: usize = 100;
pub const LEADERBOARD_SIZE: usize = 10;
pub const ANNOUNCER_NAME: &str = "📢 Система";
