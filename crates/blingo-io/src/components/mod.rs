//! Dioxus UI components for blingo.
//!
//! Provides the comparison slider, the image picker with drag-and-drop,
//! the tab bar, quick-style buttons, the base image chip, a spinner, and
//! the toast.

mod base_image_chip;
mod comparison_slider;
mod image_picker;
mod quick_styles;
mod spinner;
mod tab_bar;
mod toast;

pub use base_image_chip::BaseImageChip;
pub use comparison_slider::ComparisonSlider;
pub use image_picker::{ImagePicker, READ_FAILED_MESSAGE};
pub use quick_styles::QuickStyles;
pub use spinner::Spinner;
pub use tab_bar::TabBar;
pub use toast::{TOAST_DURATION_MS, Toast, ToastMessage};
