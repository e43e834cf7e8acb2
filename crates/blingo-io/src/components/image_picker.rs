//! Image picker with drag-and-drop and file dialog.

use blingo_core::ImageFile;
use blingo_core::image_file::ACCEPT_ATTRIBUTE;
use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

/// Shown when the browser fails to hand over a file's contents.
pub const READ_FAILED_MESSAGE: &str = "Failed to read the image file.";

/// Read and validate the first file of a selection.
///
/// Returns `Ok(None)` for an empty selection and `Err` with a
/// user-facing message when the file cannot be used.
async fn read_first_image(files: Vec<FileData>) -> Result<Option<ImageFile>, String> {
    let Some(file) = files.first() else {
        return Ok(None);
    };
    let name = file.name();
    if !ImageFile::has_allowed_extension(&name) {
        return Err(format!("Unsupported file type: {name}"));
    }
    let bytes = file.read_bytes().await.map_err(|e| {
        warn!(%name, error = %e, "failed to read selected file");
        READ_FAILED_MESSAGE.to_owned()
    })?;
    let image = ImageFile::from_upload(bytes.to_vec(), name).map_err(|e| {
        warn!(error = %e, "rejected selected file");
        format!("Could not use that file: {e}")
    })?;
    info!(
        name = image.name(),
        mime = image.mime_type(),
        bytes = image.bytes().len(),
        "image selected"
    );
    Ok(Some(image))
}

/// Props for the [`ImagePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImagePickerProps {
    /// Button text.
    label: String,
    /// Called with the validated image.
    on_select: EventHandler<ImageFile>,
    /// Called with a user-facing message when a selection is rejected.
    on_error: EventHandler<String>,
    /// Disables the picker (e.g. while a request is running).
    #[props(default)]
    disabled: bool,
    /// Hint under the button.
    #[props(default = "PNG, JPEG, WebP".to_owned())]
    hint: String,
}

/// A drop zone with a file picker button.
///
/// Both the dialog and drag-and-drop go through the same read and
/// validation path before `on_select` fires.
#[component]
pub fn ImagePicker(props: ImagePickerProps) -> Element {
    let mut dragging = use_signal(|| false);
    let disabled = props.disabled;

    let process_files = move |files: Vec<FileData>| async move {
        match read_first_image(files).await {
            Ok(Some(image)) => props.on_select.call(image),
            Ok(None) => {}
            Err(message) => props.on_error.call(message),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        if !disabled {
            process_files(evt.files()).await;
        }
    };

    let zone_class = if dragging() { "drop-zone active" } else { "drop-zone" };
    let button_class = if disabled {
        "btn btn-secondary disabled"
    } else {
        "btn btn-secondary"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(!disabled);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            label {
                class: "{button_class}",
                input {
                    r#type: "file",
                    accept: ACCEPT_ATTRIBUTE,
                    class: "hidden",
                    disabled,
                    onchange: handle_files,
                }
                "{props.label}"
            }

            p { class: "hint", "{props.hint}" }
        }
    }
}
