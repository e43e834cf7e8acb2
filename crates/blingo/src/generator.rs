//! Photo generator: prompt plus optional base image, generate, save.

use std::rc::Rc;

use blingo_core::generation::has_input;
use blingo_core::prompt::{QuickStyle, append_style, generated_filename};
use blingo_core::{GeneratedImage, ImageFile};
use blingo_io::download;
use blingo_io::{
    BaseImageChip, GenerationClient, ImagePicker, QuickStyles, Spinner, Tab, ToastMessage,
};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdSparkles};

use crate::SAVED_MESSAGE;

/// Shown when "Generate Image" is pressed with nothing to work from.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a prompt or upload an image.";

/// A finished generation and the name it downloads under.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Generated {
    image: GeneratedImage,
    filename: String,
}

#[component]
pub fn GeneratorPanel() -> Element {
    let client: Rc<GenerationClient> = use_context();
    let mut toast: Signal<Option<ToastMessage>> = use_context();

    let mut prompt = use_signal(String::new);
    let mut base = use_signal(|| Option::<ImageFile>::None);
    let mut result = use_signal(|| Option::<Generated>::None);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut requests = use_signal(|| 0u64);

    let base_url = use_memo(move || base.read().as_ref().map(ImageFile::data_url));
    let result_url = use_memo(move || result.read().as_ref().map(|g| g.image.data_url()));

    let generate = move |_: MouseEvent| {
        let text = prompt();
        let base_image = base();
        if !has_input(&text, base_image.as_ref()) {
            error.set(Some(EMPTY_INPUT_MESSAGE.to_owned()));
            return;
        }

        requests += 1;
        let my_request = *requests.peek();
        busy.set(true);
        error.set(None);
        result.set(None);

        let client = Rc::clone(&client);
        spawn(async move {
            let outcome = client.generate(&text, base_image.as_ref()).await;

            if *requests.peek() != my_request {
                tracing::debug!(my_request, "discarding stale generate result");
                return;
            }

            match outcome {
                Ok(image) => result.set(Some(Generated {
                    image,
                    filename: generated_filename(&text),
                })),
                Err(e) => {
                    tracing::error!(error = %e, "generate failed");
                    error.set(Some(e.user_message(Tab::Generator.failure_message())));
                }
            }
            busy.set(false);
        });
    };

    let save = move |_: MouseEvent| {
        let Some(generated) = result.peek().clone() else {
            return;
        };
        match download::trigger_download(
            generated.image.bytes(),
            &generated.filename,
            generated.image.mime_type(),
        ) {
            Ok(()) => {
                tracing::info!(name = %generated.filename, "generated image saved");
                toast.set(Some(ToastMessage::new(SAVED_MESSAGE)));
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                error.set(Some(format!("Download failed: {e}")));
            }
        }
    };

    let on_base_select = move |image: ImageFile| {
        error.set(None);
        base.set(Some(image));
    };

    let on_style = move |style: QuickStyle| {
        let next = append_style(&prompt.peek(), style.prompt);
        prompt.set(next);
    };

    let can_generate = !busy() && has_input(&prompt.read(), base.read().as_ref());
    let base_name = base.read().as_ref().map(|b| b.name().to_owned());
    let picker_label = if base_name.is_some() {
        "Change Base Image"
    } else {
        "Upload Base Image"
    };

    rsx! {
        div { class: "panel",
            div { class: "panel-grid",
                section { class: "card",
                    h2 { class: "card-title", "Describe Your Image" }
                    textarea {
                        class: "prompt-input",
                        rows: "5",
                        placeholder: "A cat astronaut floating above a neon city...",
                        value: "{prompt}",
                        disabled: busy(),
                        oninput: move |evt: FormEvent| prompt.set(evt.value()),
                    }
                    QuickStyles { on_pick: on_style, disabled: busy() }

                    if let Some((src, name)) = base_url().zip(base_name) {
                        BaseImageChip {
                            src,
                            name,
                            disabled: busy(),
                            on_remove: move |()| base.set(None),
                        }
                    }
                    ImagePicker {
                        label: picker_label.to_owned(),
                        hint: "Optional: the model will edit this image".to_owned(),
                        disabled: busy(),
                        on_select: on_base_select,
                        on_error: move |message: String| error.set(Some(message)),
                    }
                }

                section { class: "card",
                    h2 { class: "card-title", "Generated Image" }
                    div { class: "image-frame",
                        if busy() {
                            Spinner { message: Tab::Generator.busy_message().to_owned() }
                        } else if let Some(url) = result_url() {
                            img { class: "image-fill", src: "{url}", alt: "Generated" }
                        } else {
                            p { class: "placeholder", "Your generated image will appear here" }
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
                disabled: !can_generate,
                onclick: generate,
                Icon { icon: LdSparkles, width: 18, height: 18 }
                "Generate Image"
            }

            if let Some(message) = error() {
                div { class: "error-banner", role: "alert", "{message}" }
            }
        }
    }
}
