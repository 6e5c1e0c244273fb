use dioxus::prelude::*;
use log::{debug, error};

use shufflefit_domain::{TimerEvent, TimerState};
use shufflefit_web_app as web_app;

use crate::component::element::{Color, Message};

#[component]
pub fn Countdown(state: TimerState, exercises: usize) -> Element {
    match state {
        TimerState::Idle => rsx! {},
        TimerState::Active { index, time_left } => rsx! {
            div {
                class: "notification is-link has-text-centered mx-2",
                p { class: "is-size-6", "Exercise {index + 1} of {exercises}" }
                p {
                    class: "is-size-1 has-text-weight-bold",
                    {web_app::format_seconds(i64::from(time_left))}
                }
            }
        },
        TimerState::Resting { index, time_left } => rsx! {
            div {
                class: "notification is-warning has-text-centered mx-2",
                p { class: "is-size-6", "Rest, next up: exercise {index + 1} of {exercises}" }
                p {
                    class: "is-size-1 has-text-weight-bold",
                    {web_app::format_seconds(i64::from(time_left))}
                }
            }
        },
        TimerState::Finished => rsx! {
            div {
                class: "mx-2",
                Message {
                    color: Color::Success,
                    p { class: "has-text-centered is-size-5", "Workout complete!" }
                }
            }
        },
    }
}

/// Audible signals for timer events.
#[derive(Clone)]
pub struct Beeper {
    audio_context: Option<web_sys::AudioContext>,
}

impl Beeper {
    pub fn new() -> Self {
        Self {
            audio_context: match web_sys::AudioContext::new() {
                Ok(audio_context) => Some(audio_context),
                Err(err) => {
                    error!("failed to create audio context: {err:?}");
                    None
                }
            },
        }
    }

    /// Browsers keep an audio context suspended until a user interaction resumes it.
    pub fn resume(&self) {
        if let Some(audio_context) = &self.audio_context {
            if let Err(err) = audio_context.resume() {
                error!("failed to resume audio context: {err:?}");
            }
        }
    }

    /// Beep during the last three seconds of a countdown and on every transition.
    ///
    /// A volume of 0 is silent.
    pub fn play(&self, event: TimerEvent, volume: u8) {
        let Some(audio_context) = &self.audio_context else {
            return;
        };
        if volume == 0 {
            return;
        }
        let (frequency, length) = match event {
            TimerEvent::Countdown { time_left: 1..=3 } => (2000., 0.15),
            TimerEvent::RestStarted { .. } | TimerEvent::ExerciseStarted { .. } => (2000., 0.5),
            TimerEvent::WorkoutFinished { .. } => (1000., 1.0),
            TimerEvent::Countdown { .. } | TimerEvent::NotRunning => return,
        };
        debug!("beep on {event:?}");
        if let Err(err) = play_beep(
            audio_context,
            frequency,
            audio_context.current_time() + 0.01,
            length,
            volume,
        ) {
            error!("failed to play beep: {err:?}");
        }
    }
}

impl Default for Beeper {
    fn default() -> Self {
        Self::new()
    }
}

fn play_beep(
    audio_context: &web_sys::AudioContext,
    frequency: f32,
    start: f64,
    length: f64,
    volume: u8,
) -> Result<(), web_sys::wasm_bindgen::JsValue> {
    let oscillator = audio_context.create_oscillator()?;
    let gain = audio_context.create_gain()?;
    gain.gain().set_value(f32::from(volume) / 100.);
    gain.connect_with_audio_node(&audio_context.destination())?;
    oscillator.connect_with_audio_node(&gain)?;
    oscillator.frequency().set_value(frequency);
    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(start + length)?;
    Ok(())
}
