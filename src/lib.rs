//! Hire Me - an interactive portfolio page
//!
//! Core modules:
//! - `quiz`: Employer compatibility quiz (questions, engine, tiers)
//! - `submissions`: Pitch records, LocalStorage-backed store, card renderer
//! - `view`: Single-visible-section navigation
//! - `app`: Command handlers the page wires DOM events to
//! - `effects`: Decorative state machines (particles, count-up, typewriter, konami)
//! - `settings`: Persisted user preferences
//! - `platform`: Browser bindings (wasm32 only)

pub mod app;
pub mod effects;
pub mod html;
pub mod platform;
pub mod quiz;
pub mod settings;
pub mod storage;
pub mod submissions;
pub mod view;

pub use app::{Portfolio, UiEvent};
pub use quiz::{QuizEngine, Tier};
pub use settings::Settings;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use submissions::{SubmissionRecord, SubmissionStore};
pub use view::{View, ViewNavigator};

/// Page configuration constants
pub mod consts {
    /// Number of quiz questions
    pub const QUESTION_COUNT: usize = 5;
    /// Highest point value of a single option
    pub const MAX_OPTION_POINTS: u32 = 10;
    /// Best possible quiz score (5 questions x 10 points)
    pub const MAX_QUIZ_SCORE: u32 = QUESTION_COUNT as u32 * MAX_OPTION_POINTS;

    /// Delay between selecting an option and leaving the question (ms)
    pub const ANSWER_DELAY_MS: u32 = 800;
    /// Delay between hiding a question and showing the next card or result (ms)
    pub const TRANSITION_DELAY_MS: u32 = 300;

    /// Score count-up increment per frame (percentage points)
    pub const COUNT_UP_STEP: u32 = 2;
    /// Score count-up frame interval (ms)
    pub const COUNT_UP_INTERVAL_MS: u32 = 50;

    /// LocalStorage key holding the submission collection
    pub const SUBMISSIONS_KEY: &str = "employerSubmissions";
    /// LocalStorage key holding the settings
    pub const SETTINGS_KEY: &str = "portfolio_settings";

    /// Background particles on a regular screen
    pub const PARTICLE_COUNT: usize = 50;
    /// Viewport width (px) at or below which the particle count is halved
    pub const NARROW_SCREEN_WIDTH: f32 = 768.0;

    /// Delay before the hero title starts typing (ms)
    pub const TYPEWRITER_START_DELAY_MS: u32 = 500;
    /// Per-character typing interval (ms)
    pub const TYPEWRITER_SPEED_MS: u32 = 50;
}

/// Score as a rounded percentage of the best possible score, clamped to [0, 100]
#[inline]
pub fn score_percentage(score: u32) -> u32 {
    let pct = (score as f64 / consts::MAX_QUIZ_SCORE as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}
