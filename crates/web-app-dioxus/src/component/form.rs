use dioxus::prelude::*;

#[component]
pub fn SelectField(
    label: String,
    options: Vec<Element>,
    disabled: Option<bool>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                div {
                    class: "select",
                    select {
                        disabled: disabled.unwrap_or_default(),
                        onchange,
                        for option in options {
                            {option}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectOption(text: String, value: String, selected: bool) -> Element {
    rsx! {
        option {
            selected,
            value,
            "{text}"
        }
    }
}

/// Tags that are switched on and off individually.
///
/// `tags` holds the label and state of each tag. Clicking a tag calls `ontoggle` with its index.
#[component]
pub fn ToggleTags(tags: Vec<(String, bool)>, ontoggle: EventHandler<usize>) -> Element {
    rsx! {
        div {
            class: "tags",
            for (i, (name, active)) in tags.into_iter().enumerate() {
                span {
                    class: "tag is-medium is-hoverable is-clickable",
                    class: if active { "is-link" },
                    onclick: move |_| ontoggle.call(i),
                    "{name}"
                }
            }
        }
    }
}
