//! Thumbnail of the generator's base image with a remove button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdX;

/// Props for the [`BaseImageChip`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BaseImageChipProps {
    /// `data:` URL of the thumbnail.
    src: String,
    /// Original filename.
    name: String,
    /// Called when the remove button is clicked.
    on_remove: EventHandler<()>,
    #[props(default)]
    disabled: bool,
}

#[component]
pub fn BaseImageChip(props: BaseImageChipProps) -> Element {
    rsx! {
        div { class: "base-chip",
            img { class: "base-chip-thumb", src: "{props.src}", alt: "Base image" }
            span { class: "base-chip-name", title: "{props.name}", "{props.name}" }
            button {
                class: "base-chip-remove",
                aria_label: "Remove base image",
                disabled: props.disabled,
                onclick: move |_| props.on_remove.call(()),
                Icon { icon: LdX, width: 14, height: 14 }
            }
        }
    }
}
