use log::{debug, info};

use crate::Routine;

pub const DEFAULT_REST_SECONDS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Rest,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Idle,
    /// Performing exercise `index`.
    Active { index: usize, time_left: u32 },
    /// Resting before exercise `index`.
    Resting { index: usize, time_left: u32 },
    /// The last exercise has been completed.
    Finished,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    NotRunning,
    Countdown { time_left: u32 },
    RestStarted { completed: usize, next: usize },
    ExerciseStarted { index: usize },
    WorkoutFinished { completed: usize },
}

/// Interval timer walking a routine: each exercise counts down from its duration, followed by a
/// fixed rest before the next exercise.
///
/// The timer does not measure time itself. Each call to [`WorkoutTimer::tick`] accounts for one
/// elapsed second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTimer {
    rest_seconds: u32,
    durations: Vec<u32>,
    completed: Vec<bool>,
    state: TimerState,
}

impl WorkoutTimer {
    #[must_use]
    pub fn new(rest_seconds: u32) -> Self {
        Self {
            rest_seconds,
            durations: vec![],
            completed: vec![],
            state: TimerState::Idle,
        }
    }

    /// Start at the first exercise, discarding any previous progress.
    ///
    /// An empty routine is finished immediately.
    pub fn start(&mut self, routine: &Routine) {
        self.durations = routine.iter().map(crate::Exercise::duration).collect();
        self.completed = vec![false; routine.len()];
        self.state = match self.durations.first() {
            Some(duration) => TimerState::Active {
                index: 0,
                time_left: *duration,
            },
            None => TimerState::Finished,
        };
        info!("started workout with {} exercises", self.durations.len());
    }

    pub fn reset(&mut self) {
        self.durations.clear();
        self.completed.clear();
        self.state = TimerState::Idle;
    }

    pub fn tick(&mut self) -> TimerEvent {
        let (state, event) = match self.state {
            TimerState::Idle | TimerState::Finished => return TimerEvent::NotRunning,
            TimerState::Active { index, time_left } if time_left > 0 => (
                TimerState::Active {
                    index,
                    time_left: time_left - 1,
                },
                TimerEvent::Countdown {
                    time_left: time_left - 1,
                },
            ),
            TimerState::Active { index, .. } => {
                if let Some(completed) = self.completed.get_mut(index) {
                    *completed = true;
                }
                let next = index + 1;
                if next < self.durations.len() {
                    debug!("completed exercise {index}, resting before exercise {next}");
                    (
                        TimerState::Resting {
                            index: next,
                            time_left: self.rest_seconds,
                        },
                        TimerEvent::RestStarted {
                            completed: index,
                            next,
                        },
                    )
                } else {
                    info!("finished workout");
                    (
                        TimerState::Finished,
                        TimerEvent::WorkoutFinished { completed: index },
                    )
                }
            }
            TimerState::Resting { index, time_left } if time_left > 0 => (
                TimerState::Resting {
                    index,
                    time_left: time_left - 1,
                },
                TimerEvent::Countdown {
                    time_left: time_left - 1,
                },
            ),
            TimerState::Resting { index, .. } => {
                debug!("starting exercise {index}");
                (
                    TimerState::Active {
                        index,
                        time_left: self.durations.get(index).copied().unwrap_or(0),
                    },
                    TimerEvent::ExerciseStarted { index },
                )
            }
        };
        self.state = state;
        event
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn rest_seconds(&self) -> u32 {
        self.rest_seconds
    }

    pub fn set_rest_seconds(&mut self, rest_seconds: u32) {
        self.rest_seconds = rest_seconds;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(
            self.state,
            TimerState::Active { .. } | TimerState::Resting { .. }
        )
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            TimerState::Active { index, .. } | TimerState::Resting { index, .. } => Some(index),
            TimerState::Idle | TimerState::Finished => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self.state {
            TimerState::Active { .. } => Some(Phase::Active),
            TimerState::Resting { .. } => Some(Phase::Rest),
            TimerState::Idle | TimerState::Finished => None,
        }
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        match self.state {
            TimerState::Active { time_left, .. } | TimerState::Resting { time_left, .. } => {
                time_left
            }
            TimerState::Idle | TimerState::Finished => 0,
        }
    }

    #[must_use]
    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }
}

impl Default for WorkoutTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REST_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Exercise, Group, Name};

    fn routine(reps: &[&str]) -> Routine {
        Routine::new(
            reps.iter()
                .enumerate()
                .map(|(i, r)| Exercise {
                    name: Name::new(&format!("Exercise {i}")).unwrap(),
                    description: String::new(),
                    reps: (*r).to_string(),
                    group: Group::Cardio,
                })
                .collect(),
        )
    }

    fn tick_n(timer: &mut WorkoutTimer, n: u32) {
        for _ in 0..n {
            timer.tick();
        }
    }

    #[test]
    fn test_timer_sequence() {
        let mut timer = WorkoutTimer::default();
        timer.start(&routine(&["30 seconds", "15 reps", "45 seconds"]));

        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 0,
                time_left: 30
            }
        );
        assert_eq!(timer.completed(), &[false, false, false]);

        tick_n(&mut timer, 30);
        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 0,
                time_left: 0
            }
        );
        assert!(!timer.is_completed(0));

        assert_eq!(
            timer.tick(),
            TimerEvent::RestStarted {
                completed: 0,
                next: 1
            }
        );
        assert_eq!(
            timer.state(),
            TimerState::Resting {
                index: 1,
                time_left: 30
            }
        );
        assert_eq!(timer.completed(), &[true, false, false]);

        tick_n(&mut timer, 30);
        assert_eq!(timer.tick(), TimerEvent::ExerciseStarted { index: 1 });
        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 1,
                time_left: 15
            }
        );

        tick_n(&mut timer, 15);
        assert_eq!(
            timer.tick(),
            TimerEvent::RestStarted {
                completed: 1,
                next: 2
            }
        );
        assert_eq!(timer.completed(), &[true, true, false]);

        tick_n(&mut timer, 30);
        assert_eq!(timer.tick(), TimerEvent::ExerciseStarted { index: 2 });
        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 2,
                time_left: 45
            }
        );

        tick_n(&mut timer, 45);
        assert_eq!(timer.tick(), TimerEvent::WorkoutFinished { completed: 2 });
        assert_eq!(timer.state(), TimerState::Finished);
        assert_eq!(timer.completed(), &[true, true, true]);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_timer_total_ticks() {
        let mut timer = WorkoutTimer::default();
        timer.start(&routine(&["30 seconds", "15 reps", "45 seconds"]));

        let mut ticks = 0;
        while timer.is_running() {
            timer.tick();
            ticks += 1;
        }

        assert_eq!(ticks, 31 + 31 + 16 + 31 + 46);
    }

    #[test]
    fn test_timer_finished_is_terminal() {
        let mut timer = WorkoutTimer::default();
        timer.start(&routine(&["1 rep"]));
        tick_n(&mut timer, 2);
        assert_eq!(timer.state(), TimerState::Finished);

        let finished = timer.clone();
        for _ in 0..100 {
            assert_eq!(timer.tick(), TimerEvent::NotRunning);
        }
        assert_eq!(timer, finished);
    }

    #[test]
    fn test_timer_zero_duration() {
        let mut timer = WorkoutTimer::new(5);
        timer.start(&routine(&["as many as possible", "10 reps"]));

        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 0,
                time_left: 0
            }
        );
        assert_eq!(
            timer.tick(),
            TimerEvent::RestStarted {
                completed: 0,
                next: 1
            }
        );
        assert_eq!(
            timer.state(),
            TimerState::Resting {
                index: 1,
                time_left: 5
            }
        );
    }

    #[test]
    fn test_timer_idle() {
        let mut timer = WorkoutTimer::default();

        assert_eq!(timer.tick(), TimerEvent::NotRunning);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.current_index(), None);
        assert_eq!(timer.phase(), None);
        assert_eq!(timer.time_left(), 0);
        assert!(timer.completed().is_empty());
    }

    #[test]
    fn test_timer_empty_routine() {
        let mut timer = WorkoutTimer::default();
        timer.start(&Routine::default());

        assert_eq!(timer.state(), TimerState::Finished);
        assert_eq!(timer.tick(), TimerEvent::NotRunning);
    }

    #[test]
    fn test_timer_restart() {
        let mut timer = WorkoutTimer::default();
        let routine = routine(&["2 reps", "3 reps"]);
        timer.start(&routine);
        tick_n(&mut timer, 5);
        assert_eq!(timer.completed(), &[true, false]);

        timer.start(&routine);

        assert_eq!(
            timer.state(),
            TimerState::Active {
                index: 0,
                time_left: 2
            }
        );
        assert_eq!(timer.completed(), &[false, false]);
    }

    #[test]
    fn test_timer_reset() {
        let mut timer = WorkoutTimer::default();
        timer.start(&routine(&["2 reps", "3 reps"]));
        tick_n(&mut timer, 4);

        timer.reset();

        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.completed().is_empty());
        assert_eq!(timer.tick(), TimerEvent::NotRunning);
    }

    #[rstest]
    #[case(0, Some(0), Some(Phase::Active), 3)]
    #[case(2, Some(0), Some(Phase::Active), 1)]
    #[case(4, Some(1), Some(Phase::Rest), 10)]
    #[case(5, Some(1), Some(Phase::Rest), 9)]
    #[case(15, Some(1), Some(Phase::Active), 2)]
    #[case(18, None, None, 0)]
    fn test_timer_accessors(
        #[case] ticks: u32,
        #[case] index: Option<usize>,
        #[case] phase: Option<Phase>,
        #[case] time_left: u32,
    ) {
        let mut timer = WorkoutTimer::new(10);
        timer.start(&routine(&["3 seconds", "2 seconds"]));
        tick_n(&mut timer, ticks);

        assert_eq!(timer.current_index(), index);
        assert_eq!(timer.phase(), phase);
        assert_eq!(timer.time_left(), time_left);
    }
}
