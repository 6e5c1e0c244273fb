#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod session;
pub mod settings;
mod ticker;

use ::log::warn;
use shufflefit_domain::Catalog;

pub use session::{Summary, TickToken, WorkoutSession};
pub use settings::Settings;
pub use ticker::Ticker;

pub const TITLE: &str = "Workout Routine Randomizer";
pub const DESCRIPTION: &str = "Generate a random workout routine across cardio, strength, core, \
     and stretching categories. Click the button to create a fresh routine.";

/// Parse a custom catalog from `json` if present. An invalid catalog is logged and replaced by the
/// built-in one.
#[must_use]
pub fn load_catalog(json: Option<&str>) -> Catalog {
    match json.map(Catalog::from_json) {
        Some(Ok(catalog)) => catalog,
        Some(Err(err)) => {
            warn!("{err}, using built-in catalog");
            Catalog::default()
        }
        None => Catalog::default(),
    }
}

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_seconds(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    format!("{sign}{}:{:02}", seconds / 60, seconds % 60)
}
