use dioxus::prelude::*;

use shufflefit_web_app as web_app;

use crate::{
    Route, SETTINGS,
    component::element::{Color, Dialog, Icon},
};

const REST_SECONDS: [u32; 4] = [15, 30, 45, 60];
const BEEP_VOLUMES: [(u8, &str); 4] = [(0, "Off"), (40, "Low"), (80, "Medium"), (100, "High")];

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut settings_visible = use_signal(|| false);
    let navigator = use_navigator();

    let page_title = match use_route::<Route>() {
        Route::Workout {} => web_app::TITLE,
        Route::Log {} => "Log",
        Route::NotFound { .. } => "",
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Workout {});
                            },
                            Icon { symbol: "🏋" }
                            "Workout"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *settings_visible.write() = true;
                                *menu_visible.write() = false;
                            },
                            Icon { symbol: "⚙" }
                            "Settings"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Log {});
                            },
                            Icon { symbol: "📜" }
                            "Log"
                        }
                    }
                }
            }
        }
        if settings_visible() {
            Settings { settings_visible }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Settings(settings_visible: Signal<bool>) -> Element {
    let settings = *SETTINGS.read();

    rsx! {
        Dialog {
            color: Color::Primary,
            title: rsx! { "Settings" },
            close_event: move |_| { *settings_visible.write() = false; },
            p {
                class: "mb-5",
                h1 { class: "subtitle", "Rest between exercises" }
                div {
                    class: "field has-addons",
                    for rest_seconds in REST_SECONDS {
                        p {
                            class: "control",
                            span {
                                class: "button",
                                class: if settings.rest_seconds == rest_seconds { "is-link" },
                                onclick: move |_| { SETTINGS.write().rest_seconds = rest_seconds; },
                                "{rest_seconds} s"
                            }
                        }
                    }
                }
            }
            p {
                class: "mb-5",
                h1 { class: "subtitle", "Beep volume" }
                div {
                    class: "field has-addons",
                    for (beep_volume, label) in BEEP_VOLUMES {
                        p {
                            class: "control",
                            span {
                                class: "button",
                                class: if settings.beep_volume == beep_volume { "is-link" },
                                onclick: move |_| { SETTINGS.write().beep_volume = beep_volume; },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
