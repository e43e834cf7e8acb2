//! Photo enhancer: upload a photo, enhance it, compare, save.

use std::rc::Rc;

use blingo_core::prompt::enhanced_filename;
use blingo_core::{GeneratedImage, ImageFile};
use blingo_io::download;
use blingo_io::{ComparisonSlider, GenerationClient, ImagePicker, Spinner, Tab, ToastMessage};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdSparkles};

use crate::SAVED_MESSAGE;

/// Shown when "Enhance Image" is pressed without a photo.
pub const SELECT_FIRST_MESSAGE: &str = "Please select an image first.";

#[component]
pub fn EnhancerPanel() -> Element {
    let client: Rc<GenerationClient> = use_context();
    let mut toast: Signal<Option<ToastMessage>> = use_context();

    let mut original = use_signal(|| Option::<ImageFile>::None);
    let mut result = use_signal(|| Option::<GeneratedImage>::None);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    // Bumped by every request and every new upload; a finished request
    // whose number is no longer current is discarded.
    let mut requests = use_signal(|| 0u64);

    let before_url = use_memo(move || original.read().as_ref().map(ImageFile::data_url));
    let after_url = use_memo(move || result.read().as_ref().map(GeneratedImage::data_url));

    let on_select = move |image: ImageFile| {
        requests += 1;
        busy.set(false);
        result.set(None);
        error.set(None);
        original.set(Some(image));
    };

    let enhance = move |_: MouseEvent| {
        let Some(photo) = original() else {
            error.set(Some(SELECT_FIRST_MESSAGE.to_owned()));
            return;
        };

        requests += 1;
        let my_request = *requests.peek();
        busy.set(true);
        error.set(None);
        result.set(None);

        let client = Rc::clone(&client);
        spawn(async move {
            let outcome = client.enhance(&photo).await;

            if *requests.peek() != my_request {
                tracing::debug!(my_request, "discarding stale enhance result");
                return;
            }

            match outcome {
                Ok(image) => result.set(Some(image)),
                Err(e) => {
                    tracing::error!(error = %e, "enhance failed");
                    error.set(Some(e.user_message(Tab::Enhancer.failure_message())));
                }
            }
            busy.set(false);
        });
    };

    let save = move |_: MouseEvent| {
        let name = enhanced_filename(original.peek().as_ref().map(ImageFile::name));
        let saved = match result.peek().as_ref() {
            Some(image) => download::trigger_download(image.bytes(), &name, image.mime_type()),
            None => return,
        };
        match saved {
            Ok(()) => {
                tracing::info!(%name, "enhanced image saved");
                toast.set(Some(ToastMessage::new(SAVED_MESSAGE)));
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                error.set(Some(format!("Download failed: {e}")));
            }
        }
    };

    let has_image = original.read().is_some();
    let picker_label = if has_image { "Change Image" } else { "Select Image" };

    rsx! {
        div { class: "panel",
            div { class: "panel-grid",
                section { class: "card",
                    h2 { class: "card-title", "Original Image" }
                    div { class: "image-frame",
                        if let Some(url) = before_url() {
                            img { class: "image-fill", src: "{url}", alt: "Original" }
                        } else {
                            p { class: "placeholder", "Select a photo to get started" }
                        }
                    }
                    ImagePicker {
                        label: picker_label.to_owned(),
                        disabled: busy(),
                        on_select: on_select,
                        on_error: move |message: String| error.set(Some(message)),
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Enhanced Image" }
                    div { class: "image-frame",
                        if busy() {
                            Spinner { message: Tab::Enhancer.busy_message().to_owned() }
                        } else if let Some((before, after)) = before_url().zip(after_url()) {
                            ComparisonSlider {
                                key: "{requests}",
                                before,
                                after,
                            }
                        } else {
                            p { class: "placeholder", "Your enhanced image will appear here" }
                        }
                    }
                    if result.read().is_some() && !busy() {
                        button { class: "btn btn-secondary", onclick: save,
                            Icon { icon: LdDownload, width: 18, height: 18 }
                            "Save Image"
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                disabled: busy() || !has_image,
                onclick: enhance,
                Icon { icon: LdSparkles, width: 18, height: 18 }
                "Enhance Image"
            }

            if let Some(message) = error() {
                div { class: "error-banner", role: "alert", "{message}" }
            }
        }
    }
}
