use std::slice::Iter;

use chrono::Duration;
use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::{Exercise, Property};

/// Ordered exercises of the current session.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct Routine(Vec<Exercise>);

impl Routine {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self(exercises)
    }

    /// Total time of all exercises plus a rest between each pair of consecutive exercises.
    #[must_use]
    pub fn estimated_duration(&self, rest_seconds: u32) -> Duration {
        let exercises = self
            .0
            .iter()
            .map(Exercise::duration)
            .map(i64::from)
            .sum::<i64>();
        let rests =
            i64::try_from(self.0.len().saturating_sub(1)).unwrap_or(0) * i64::from(rest_seconds);
        Duration::seconds(exercises + rests)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum RoutineLength {
    Three,
    #[default]
    Five,
    Seven,
    Ten,
}

impl RoutineLength {
    #[must_use]
    pub fn value(self) -> usize {
        match self {
            RoutineLength::Three => 3,
            RoutineLength::Five => 5,
            RoutineLength::Seven => 7,
            RoutineLength::Ten => 10,
        }
    }
}

impl Property for RoutineLength {
    fn iter() -> Iter<'static, RoutineLength> {
        static LENGTHS: [RoutineLength; 4] = [
            RoutineLength::Three,
            RoutineLength::Five,
            RoutineLength::Seven,
            RoutineLength::Ten,
        ];
        LENGTHS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            RoutineLength::Three => "3 Exercises",
            RoutineLength::Five => "5 Exercises",
            RoutineLength::Seven => "7 Exercises",
            RoutineLength::Ten => "10 Exercises",
        }
    }
}

impl TryFrom<usize> for RoutineLength {
    type Error = RoutineLengthError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        RoutineLength::iter()
            .find(|l| l.value() == value)
            .copied()
            .ok_or(RoutineLengthError::Unsupported(value))
    }
}

impl From<RoutineLength> for usize {
    fn from(value: RoutineLength) -> Self {
        value.value()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutineLengthError {
    #[error("Routine length must be 3, 5, 7 or 10 ({0})")]
    Unsupported(usize),
}

/// Per-slot flags marking exercises that must survive a regeneration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LockMask(Vec<bool>);

impl LockMask {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    #[must_use]
    pub fn all(len: usize) -> Self {
        Self(vec![true; len])
    }

    pub fn reset(&mut self, len: usize) {
        self.0 = vec![false; len];
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|l| *l)
    }

    /// Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, locked: bool) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = locked;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let locked = !self.is_locked(index);
        self.set(index, locked)
    }
}

impl From<Vec<bool>> for LockMask {
    fn from(value: Vec<bool>) -> Self {
        Self(value)
    }
}
