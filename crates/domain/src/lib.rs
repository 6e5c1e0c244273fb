#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

mod catalog;
mod error;
mod exercise;
mod generator;
mod name;
mod routine;
mod timer;

pub use catalog::{Catalog, GroupFilter};
pub use error::{CatalogError, GenerateError};
pub use exercise::{Difficulty, Exercise, Group};
pub use generator::Generator;
pub use name::{Name, NameError};
pub use routine::{LockMask, Routine, RoutineLength, RoutineLengthError};
pub use timer::{DEFAULT_REST_SECONDS, Phase, TimerEvent, TimerState, WorkoutTimer};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
