use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "danger")]
    Danger,
}

#[component]
pub fn Block(children: Element, class: Option<String>) -> Element {
    rsx! {
        div {
            class: "block",
            class: if let Some(class) = &class { "{class}" },
            {children}
        }
    }
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn DataBox(children: Element, title: String) -> Element {
    rsx! {
        div {
            class: "box has-text-centered mx-2 p-3",
            p {
                class: "is-size-6",
                {title}
            }
            p {
                class: "is-size-5",
                {children}
            }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-1 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn NoData() -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light mb-6",
            "No data"
        }
    }
}

/// Emoji rendered in the place of an icon.
#[component]
pub fn Icon(
    symbol: String,
    title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            title: title.unwrap_or_default(),
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            "{symbol}"
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn Title(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container",
                h1 { class: "title is-4", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "subtitle is-6 has-text-grey", "{subtitle}" }
                }
            }
        }
    }
}

#[component]
pub fn Table(head: Option<Vec<Element>>, body: Vec<Vec<Element>>) -> Element {
    rsx! {
        div {
            class: "table-container mt-4",
            table {
                class: "table is-fullwidth is-hoverable",
                if let Some(head) = head {
                    thead {
                        tr {
                            for element in head {
                                th {
                                    {element}
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in body {
                        tr {
                            for element in row {
                                td {
                                    {element}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
