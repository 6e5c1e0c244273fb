use chrono::Duration;
use log::{debug, error};
use rand::Rng;

use shufflefit_domain::{
    Catalog, Difficulty, GenerateError, Generator, Group, GroupFilter, LockMask, Routine,
    RoutineLength, TimerEvent, WorkoutTimer,
};

use crate::Settings;

/// Identifies the single tick that may currently be pending.
///
/// Every scheduled tick gets a fresh token. A tick carrying any other token than the pending
/// one is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub exercises: usize,
    pub estimated_duration: Duration,
}

/// State of one workout widget: selection, routine, lock mask and timer.
pub struct WorkoutSession<R> {
    catalog: Catalog,
    rng: R,
    difficulty: Difficulty,
    length: RoutineLength,
    filter: GroupFilter,
    routine: Routine,
    lock_mask: LockMask,
    timer: WorkoutTimer,
    last_token: u64,
    pending_tick: Option<TickToken>,
}

impl<R: Rng> WorkoutSession<R> {
    /// Create a session and generate its first routine.
    ///
    /// If the first routine cannot be generated, the error is logged and the routine is empty.
    pub fn new(catalog: Catalog, settings: &Settings, rng: R) -> Self {
        let mut session = Self {
            catalog,
            rng,
            difficulty: settings.difficulty,
            length: settings.length,
            filter: GroupFilter::all(),
            routine: Routine::default(),
            lock_mask: LockMask::default(),
            timer: WorkoutTimer::new(settings.rest_seconds),
            last_token: 0,
            pending_tick: None,
        };
        if let Err(err) = session.generate() {
            error!("failed to generate initial routine: {err}");
        }
        session
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn select_length(&mut self, length: RoutineLength) {
        self.length = length;
    }

    pub fn toggle_group(&mut self, group: Group) {
        self.filter.toggle(group);
    }

    /// Change the rest between exercises. A running workout is stopped.
    pub fn set_rest_seconds(&mut self, rest_seconds: u32) {
        if rest_seconds == self.timer.rest_seconds() {
            return;
        }
        self.stop();
        self.timer.set_rest_seconds(rest_seconds);
    }

    /// Returns false if `index` is out of range.
    pub fn toggle_lock(&mut self, index: usize) -> bool {
        self.lock_mask.toggle(index)
    }

    /// Replace all unlocked exercises.
    ///
    /// The routine is replaced wholesale, and the lock mask reset, if nothing is locked or the
    /// selected length differs from the current routine.
    pub fn generate(&mut self) -> Result<(), GenerateError> {
        let length = self.length.value();
        let mut generator = Generator::new(&self.catalog, &mut self.rng);

        if length != self.routine.len() || !self.lock_mask.any() {
            let routine = generator.generate(self.difficulty, length, &self.filter)?;
            self.lock_mask.reset(routine.len());
            self.replace_routine(routine);
        } else {
            let routine = generator.regenerate(
                &self.routine,
                &self.lock_mask,
                self.difficulty,
                length,
                &self.filter,
            )?;
            self.replace_routine(routine);
        }

        Ok(())
    }

    /// Replace the exercise at `index`, regardless of its lock.
    pub fn regenerate_slot(&mut self, index: usize) -> Result<(), GenerateError> {
        let routine = Generator::new(&self.catalog, &mut self.rng).regenerate_one(
            &self.routine,
            self.difficulty,
            index,
            &self.filter,
        )?;
        self.replace_routine(routine);
        Ok(())
    }

    /// Start the workout from the first exercise and return the token of the first tick.
    ///
    /// A previously pending tick is cancelled.
    pub fn start(&mut self) -> Option<TickToken> {
        self.cancel_tick();
        self.timer.start(&self.routine);
        if self.timer.is_running() {
            self.schedule_tick();
        }
        self.pending_tick
    }

    /// Advance the timer by one second.
    ///
    /// Returns `None` without touching the timer if `token` is not the pending tick.
    pub fn tick(&mut self, token: TickToken) -> Option<TimerEvent> {
        if self.pending_tick != Some(token) {
            debug!("ignoring stale tick {token:?}");
            return None;
        }
        self.pending_tick = None;
        let event = self.timer.tick();
        if self.timer.is_running() {
            self.schedule_tick();
        }
        Some(event)
    }

    /// Cancel the pending tick and return the timer to idle.
    pub fn stop(&mut self) {
        self.cancel_tick();
        self.timer.reset();
    }

    #[must_use]
    pub fn pending_tick(&self) -> Option<TickToken> {
        self.pending_tick
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            exercises: self.routine.len(),
            estimated_duration: self.routine.estimated_duration(self.timer.rest_seconds()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn length(&self) -> RoutineLength {
        self.length
    }

    #[must_use]
    pub fn filter(&self) -> &GroupFilter {
        &self.filter
    }

    #[must_use]
    pub fn routine(&self) -> &Routine {
        &self.routine
    }

    #[must_use]
    pub fn lock_mask(&self) -> &LockMask {
        &self.lock_mask
    }

    #[must_use]
    pub fn timer(&self) -> &WorkoutTimer {
        &self.timer
    }

    fn replace_routine(&mut self, routine: Routine) {
        self.stop();
        self.routine = routine;
    }

    fn schedule_tick(&mut self) {
        self.last_token += 1;
        self.pending_tick = Some(TickToken(self.last_token));
    }

    fn cancel_tick(&mut self) {
        if let Some(token) = self.pending_tick.take() {
            debug!("cancelled pending tick {token:?}");
        }
    }
}
