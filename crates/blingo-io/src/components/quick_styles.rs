//! One-click prompt style buttons.

use blingo_core::prompt::{QUICK_STYLES, QuickStyle};
use dioxus::prelude::*;

/// Props for the [`QuickStyles`] component.
#[derive(Props, Clone, PartialEq)]
pub struct QuickStylesProps {
    /// Called with the chosen style.
    on_pick: EventHandler<QuickStyle>,
    /// Disables every button.
    #[props(default)]
    disabled: bool,
}

/// A wrap of buttons, one per entry in [`QUICK_STYLES`].
#[component]
pub fn QuickStyles(props: QuickStylesProps) -> Element {
    rsx! {
        div { class: "quick-styles",
            span { class: "quick-styles-label", "Quick styles:" }
            for style in QUICK_STYLES {
                button {
                    key: "{style.name}",
                    class: "chip",
                    disabled: props.disabled,
                    title: "{style.prompt}",
                    onclick: move |_| props.on_pick.call(style),
                    "{style.name}"
                }
            }
        }
    }
}
