use dioxus::prelude::*;
use dioxus::core::Task;
use gloo_timers::future::TimeoutFuture;
use log::error;
use rand::{SeedableRng, rngs::StdRng};

use shufflefit_domain::{Difficulty, Exercise, Property, RoutineLength, TimerState};
use shufflefit_web_app::{self as web_app, Ticker, WorkoutSession};

use crate::{
    NOTIFICATIONS, SETTINGS,
    component::{
        component::{Beeper, Countdown},
        element::{Block, CenteredBlock, DataBox, ErrorMessage, Icon, Title},
        form::{SelectField, SelectOption, ToggleTags},
    },
};

/// Tick task on the Dioxus runtime. Dropping it cancels the tick.
struct ScheduledTick(Task);

impl Drop for ScheduledTick {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

#[component]
pub fn Workout() -> Element {
    let mut session = use_signal(|| {
        WorkoutSession::new(
            web_app::load_catalog(option_env!("SHUFFLEFIT_CATALOG")),
            &SETTINGS.read(),
            StdRng::from_entropy(),
        )
    });
    let beeper = use_hook(Beeper::new);
    let mut ticker = use_signal(Ticker::<ScheduledTick>::new);

    use_effect(move || {
        let rest_seconds = SETTINGS.read().rest_seconds;
        session.write().set_rest_seconds(rest_seconds);
    });

    use_effect({
        let beeper = beeper.clone();
        move || {
            let pending = session.read().pending_tick();
            let volume = SETTINGS.read().beep_volume;
            let beeper = beeper.clone();
            ticker.write().sync(pending, move |token| {
                ScheduledTick(spawn(async move {
                    TimeoutFuture::new(1000).await;
                    let event = session.write().tick(token);
                    if let Some(event) = event {
                        beeper.play(event, volume);
                    }
                }))
            });
        }
    });

    let (difficulty, length, filter, groups, routine, lock_mask, timer, summary) = {
        let session = session.read();
        (
            session.difficulty(),
            session.length(),
            session.filter().clone(),
            session.catalog().groups().collect::<Vec<_>>(),
            session.routine().to_vec(),
            session.lock_mask().clone(),
            session.timer().clone(),
            session.summary(),
        )
    };
    let is_running = timer.is_running();
    let exercises = routine.len();
    let has_routine = exercises > 0;
    let cards = routine
        .into_iter()
        .enumerate()
        .map(|(index, exercise)| Card {
            index,
            locked: lock_mask.is_locked(index),
            completed: timer.is_completed(index),
            current: timer.current_index() == Some(index)
                && matches!(timer.state(), TimerState::Active { .. }),
            exercise,
        })
        .collect::<Vec<_>>();

    let difficulty_options = Difficulty::iter()
        .map(|d| {
            rsx! {
                SelectOption {
                    text: d.name().to_string(),
                    value: d.id().to_string(),
                    selected: *d == difficulty,
                }
            }
        })
        .collect::<Vec<_>>();
    let length_options = RoutineLength::iter()
        .map(|l| {
            rsx! {
                SelectOption {
                    text: l.name().to_string(),
                    value: l.value().to_string(),
                    selected: *l == length,
                }
            }
        })
        .collect::<Vec<_>>();
    let group_tags = groups
        .iter()
        .map(|g| (format!("{} {}", g.icon(), g.name()), filter.contains(*g)))
        .collect::<Vec<_>>();

    rsx! {
        Title { title: web_app::TITLE.to_string(), subtitle: web_app::DESCRIPTION.to_string() }

        Block {
            class: "mx-2",
            div {
                class: "field is-grouped is-grouped-centered is-grouped-multiline",
                div {
                    class: "control",
                    SelectField {
                        label: "Difficulty",
                        options: difficulty_options,
                        disabled: is_running,
                        onchange: move |event: FormEvent| {
                            if let Some(difficulty) = Difficulty::from_id(&event.value()) {
                                session.write().select_difficulty(difficulty);
                            }
                        },
                    }
                }
                div {
                    class: "control",
                    SelectField {
                        label: "Length",
                        options: length_options,
                        disabled: is_running,
                        onchange: move |event: FormEvent| {
                            match event
                                .value()
                                .parse::<usize>()
                                .map_err(|err| err.to_string())
                                .and_then(|value| {
                                    RoutineLength::try_from(value).map_err(|err| err.to_string())
                                }) {
                                Ok(length) => session.write().select_length(length),
                                Err(err) => error!("invalid routine length: {err}"),
                            }
                        },
                    }
                }
            }
        }

        CenteredBlock {
            ToggleTags {
                tags: group_tags,
                ontoggle: move |i: usize| {
                    if let Some(group) = groups.get(i) {
                        session.write().toggle_group(*group);
                    }
                },
            }
            if filter.is_empty() {
                p { class: "is-size-7 has-text-grey", "All groups" }
            }
        }

        CenteredBlock {
            div {
                class: "field is-grouped is-grouped-centered",
                p {
                    class: "control",
                    button {
                        class: "button is-link",
                        onclick: move |_| generate(session),
                        "Generate New Routine"
                    }
                }
                p {
                    class: "control",
                    if is_running {
                        button {
                            class: "button is-danger is-outlined",
                            onclick: move |_| session.write().stop(),
                            "Stop Workout"
                        }
                    } else {
                        button {
                            class: "button is-success",
                            disabled: !has_routine,
                            onclick: {
                                let beeper = beeper.clone();
                                move |_| {
                                    beeper.resume();
                                    session.write().start();
                                }
                            },
                            "Start Workout"
                        }
                    }
                }
            }
        }

        if !has_routine {
            ErrorMessage { message: "No routine available" }
        } else {
            div {
                class: "is-flex is-justify-content-center",
                DataBox {
                    title: "Exercises",
                    strong { "{summary.exercises}" }
                }
                DataBox {
                    title: "Estimated time",
                    strong { {web_app::format_seconds(summary.estimated_duration.num_seconds())} }
                }
            }
        }

        Block {
            Countdown { state: timer.state(), exercises }
        }

        for card in cards {
            ExerciseCard { session, card }
        }
    }
}

#[derive(Clone, PartialEq)]
struct Card {
    index: usize,
    exercise: Exercise,
    locked: bool,
    completed: bool,
    current: bool,
}

#[component]
fn ExerciseCard(session: Signal<WorkoutSession<StdRng>>, card: Card) -> Element {
    let Card {
        index,
        exercise,
        locked,
        completed,
        current,
    } = card;
    let mut session = session;
    let lock_title = if locked { "Unlock" } else { "Lock" };
    let lock_symbol = if locked { "🔒" } else { "🔓" };

    rsx! {
        div {
            class: "box mx-2",
            class: if current { "has-background-link-light" },
            div {
                class: "is-flex is-justify-content-space-between is-align-items-center",
                label {
                    class: "checkbox is-size-5 has-text-weight-bold",
                    input {
                        r#type: "checkbox",
                        class: "mr-2",
                        checked: completed,
                        disabled: true,
                    }
                    Icon {
                        symbol: exercise.group.icon().to_string(),
                        title: exercise.group.name().to_string(),
                    }
                    " {exercise.name}"
                }
                div {
                    class: "buttons has-addons",
                    button {
                        class: "button is-small is-white",
                        title: lock_title,
                        onclick: move |_| {
                            session.write().toggle_lock(index);
                        },
                        "{lock_symbol}"
                    }
                    button {
                        class: "button is-small is-white",
                        title: "Replace exercise",
                        onclick: move |_| regenerate_slot(session, index),
                        "🔄"
                    }
                }
            }
            p { class: "mt-2", "{exercise.description}" }
            p {
                class: "is-size-7 has-text-grey mt-1",
                "Reps / Duration: {exercise.reps}"
            }
        }
    }
}

fn generate(mut session: Signal<WorkoutSession<StdRng>>) {
    let result = session.write().generate();
    if let Err(err) = result {
        error!("failed to generate routine: {err}");
        NOTIFICATIONS
            .write()
            .push(format!("Failed to generate routine: {err}"));
    }
}

fn regenerate_slot(mut session: Signal<WorkoutSession<StdRng>>, index: usize) {
    let result = session.write().regenerate_slot(index);
    if let Err(err) = result {
        error!("failed to replace exercise {index}: {err}");
        NOTIFICATIONS
            .write()
            .push(format!("Failed to replace exercise: {err}"));
    }
}
