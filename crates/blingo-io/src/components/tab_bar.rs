//! Workflow tab selector.

use dioxus::prelude::*;

use crate::tab::Tab;

/// Props for the [`TabBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// The tab currently shown.
    active: Tab,
    /// Called when a tab button is clicked.
    on_select: EventHandler<Tab>,
}

/// Horizontal row of tab buttons, one per [`Tab::ALL`] entry.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        nav { class: "tab-bar", role: "tablist",
            for tab in Tab::ALL {
                button {
                    key: "{tab:?}",
                    role: "tab",
                    class: if tab == props.active { "tab active" } else { "tab" },
                    aria_selected: if tab == props.active { "true" } else { "false" },
                    onclick: move |_| props.on_select.call(tab),
                    "{tab}"
                }
            }
        }
    }
}
