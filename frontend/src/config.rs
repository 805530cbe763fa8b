use log::Level;

use crate::poem::{PoemScript, ScriptError};

pub const SITE_NAME: &str = "Hang Habit";
pub const CONTACT_EMAIL: &str = "hello@hanghabit.com";

/// How long the poem overlay keeps rendering its exit transition.
pub const EXIT_TRANSITION_MS: u64 = 300;
/// Downward drag distance past which a swipe dismisses the overlay.
pub const SWIPE_COMMIT_PX: f64 = 100.0;
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_LIFETIME_MS: u64 = 1_500;
/// Driver tick while the overlay is on screen.
pub const FRAME_INTERVAL_MS: u32 = 16;

const POEM_JSON: &str = include_str!("../assets/poem.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn poem_script() -> Result<PoemScript, ScriptError> {
    PoemScript::from_json(POEM_JSON)
}
