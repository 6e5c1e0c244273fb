#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::{error, info};

use shufflefit_web_app as web_app;

use component::{
    element::{Color, Dialog},
    navbar::Navbar,
};
use page::{log::Log, not_found::NotFound, workout::Workout};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Workout {},
    #[route("/log")]
    Log {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";

static SETTINGS: GlobalSignal<web_app::Settings> =
    Signal::global(|| web_app::settings::load(option_env!("SHUFFLEFIT_SETTINGS")));
static NOTIFICATIONS: GlobalSignal<Vec<String>> = Signal::global(Vec::new);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    if web_app::log::init(Arc::new(Mutex::new(web_app::log::MemoryLog::default()))).is_ok() {
        info!("{} started", web_app::TITLE);
    }
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    rsx! {
        document::Title { "{web_app::TITLE}" }
        document::Meta { name: "description", content: web_app::DESCRIPTION }
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATIONS.read().last().cloned();

    rsx! {
        if let Some(message) = notification {
            Dialog {
                color: Color::Danger,
                title: rsx! { "Error" },
                close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                div {
                    class: "block",
                    "{message}"
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            class: "button is-danger",
                            onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
