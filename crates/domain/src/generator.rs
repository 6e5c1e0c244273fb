use std::collections::HashSet;

use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{
    Catalog, Difficulty, Exercise, GenerateError, Group, GroupFilter, LockMask, Name, Property,
    Routine,
};

/// Samples routines from a catalog using an injected random source.
///
/// Each draw picks a group uniformly among the selected groups and then an exercise uniformly
/// within that group.
pub struct Generator<'a, R: Rng + ?Sized> {
    catalog: &'a Catalog,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Generator<'a, R> {
    pub fn new(catalog: &'a Catalog, rng: &'a mut R) -> Self {
        Self { catalog, rng }
    }

    /// Draw `length` exercises with pairwise distinct names, in the order they were accepted.
    ///
    /// Draws repeating an already accepted name are rejected and resampled. Requests exceeding
    /// the number of distinct names available under `filter` fail instead of sampling forever.
    pub fn generate(
        &mut self,
        difficulty: Difficulty,
        length: usize,
        filter: &GroupFilter,
    ) -> Result<Routine, GenerateError> {
        let (exercises, draws) = self.fill(&vec![None; length], filter)?;

        debug!(
            "generated {length} exercises ({} difficulty) in {draws} draws",
            difficulty.name()
        );

        Ok(Routine::new(exercises))
    }

    /// Keep every locked slot of `current` and draw the others anew.
    ///
    /// Fresh draws never repeat the name of a locked exercise. Locked slots at indices beyond
    /// `length` are dropped.
    pub fn regenerate(
        &mut self,
        current: &Routine,
        lock_mask: &LockMask,
        difficulty: Difficulty,
        length: usize,
        filter: &GroupFilter,
    ) -> Result<Routine, GenerateError> {
        if lock_mask.len() != current.len() {
            return Err(GenerateError::LockMaskMismatch {
                routine: current.len(),
                mask: lock_mask.len(),
            });
        }

        let slots = (0..length)
            .map(|idx| {
                current
                    .get(idx)
                    .filter(|_| lock_mask.is_locked(idx))
                    .cloned()
            })
            .collect::<Vec<_>>();
        let (exercises, draws) = self.fill(&slots, filter)?;

        debug!(
            "regenerated {} of {length} exercises ({} difficulty) in {draws} draws",
            slots.iter().filter(|slot| slot.is_none()).count(),
            difficulty.name()
        );

        Ok(Routine::new(exercises))
    }

    /// Replace the exercise at `index` with a single fresh draw.
    ///
    /// The draw is not checked against the other slots and may repeat one of them.
    pub fn regenerate_one(
        &mut self,
        current: &Routine,
        difficulty: Difficulty,
        index: usize,
        filter: &GroupFilter,
    ) -> Result<Routine, GenerateError> {
        if index >= current.len() {
            return Err(GenerateError::IndexOutOfRange {
                index,
                len: current.len(),
            });
        }

        let groups = self.catalog.selected_groups(filter);
        let exercise = self.draw(&groups)?.clone();

        debug!(
            "replaced exercise {index} with \"{}\" ({} difficulty)",
            exercise.name,
            difficulty.name()
        );

        let mut exercises = current.to_vec();
        exercises[index] = exercise;
        Ok(Routine::new(exercises))
    }

    /// Fill every empty slot with a draw whose name occurs in no other slot.
    ///
    /// Returns the exercises and the number of draws.
    fn fill(
        &mut self,
        slots: &[Option<Exercise>],
        filter: &GroupFilter,
    ) -> Result<(Vec<Exercise>, usize), GenerateError> {
        let groups = self.catalog.selected_groups(filter);
        if groups.is_empty() {
            return Err(GenerateError::NoExercises);
        }

        let mut names = slots
            .iter()
            .flatten()
            .map(|e| &e.name)
            .collect::<HashSet<&Name>>();
        let fresh = groups
            .iter()
            .flat_map(|g| self.catalog.exercises(*g))
            .filter(|e| !names.contains(&e.name))
            .count();
        let open = slots.iter().filter(|slot| slot.is_none()).count();
        if open > fresh {
            return Err(GenerateError::LengthExceedsCatalog {
                requested: slots.len(),
                available: fresh + names.len(),
            });
        }

        let mut exercises = Vec::with_capacity(slots.len());
        let mut draws = 0;
        for slot in slots {
            let exercise = match slot {
                Some(exercise) => exercise.clone(),
                None => loop {
                    let exercise = self.draw(&groups)?;
                    draws += 1;
                    if names.insert(&exercise.name) {
                        break exercise.clone();
                    }
                },
            };
            exercises.push(exercise);
        }

        Ok((exercises, draws))
    }

    fn draw(&mut self, groups: &[Group]) -> Result<&'a Exercise, GenerateError> {
        let catalog = self.catalog;
        let group = groups.choose(&mut *self.rng).ok_or(GenerateError::NoExercises)?;
        catalog
            .exercises(*group)
            .choose(&mut *self.rng)
            .ok_or(GenerateError::NoExercises)
    }
}
