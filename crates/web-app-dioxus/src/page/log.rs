use dioxus::prelude::*;

use shufflefit_web_app as web_app;

use crate::component::element::{ErrorMessage, NoData, Table};

#[component]
pub fn Log() -> Element {
    let entries = match web_app::log::read_entries() {
        Ok(entries) => entries,
        Err(err) => {
            return rsx! {
                ErrorMessage { message: "Failed to read log: {err}" }
            };
        }
    };

    if entries.is_empty() {
        return rsx! { NoData {} };
    }

    let body = entries
        .iter()
        .rev()
        .map(|entry| {
            let level = entry.level.to_string();
            let color = match entry.level {
                log::Level::Error => "has-text-danger",
                log::Level::Warn => "has-text-warning",
                log::Level::Info => "has-text-info",
                log::Level::Debug | log::Level::Trace => "has-text-grey",
            };
            vec![
                rsx! { span { class: "is-size-7 has-text-grey", "{entry.time}" } },
                rsx! { span { class: "is-size-7 {color}", "{level}" } },
                rsx! { span { class: "is-size-7", "{entry.message}" } },
            ]
        })
        .collect::<Vec<_>>();

    rsx! {
        Table {
            head: vec![rsx! { "Time" }, rsx! { "Level" }, rsx! { "Message" }],
            body,
        }
    }
}
