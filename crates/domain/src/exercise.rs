use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::{Name, Property};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: Name,
    pub description: String,
    /// Either a rep count or a duration, e.g. "15 reps" or "30 seconds".
    pub reps: String,
    pub group: Group,
}

impl Exercise {
    /// Seconds the timer spends on this exercise.
    ///
    /// The leading integer of `reps` is used regardless of its unit, so "15 reps" yields 15.
    /// Without a leading integer the duration is 0.
    #[must_use]
    pub fn duration(&self) -> u32 {
        leading_integer(&self.reps).unwrap_or(0)
    }
}

fn leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(idx, _)| idx);
    text[..end].parse().ok()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Cardio,
    Strength,
    Core,
    Stretching,
}

impl Group {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Group::Cardio => "🏃",
            Group::Strength => "💪",
            Group::Core => "🎯",
            Group::Stretching => "🧘",
        }
    }
}

impl Property for Group {
    fn iter() -> Iter<'static, Group> {
        static GROUPS: [Group; 4] = [
            Group::Cardio,
            Group::Strength,
            Group::Core,
            Group::Stretching,
        ];
        GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Group::Cardio => "Cardio",
            Group::Strength => "Strength",
            Group::Core => "Core",
            Group::Stretching => "Stretching",
        }
    }
}

/// Selected difficulty of a routine.
///
/// The catalog carries no difficulty information, so the value is passed through generation
/// without affecting which exercises are drawn.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Difficulty {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Difficulty::iter().find(|d| d.id() == id).copied()
    }
}
