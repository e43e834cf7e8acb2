//! blingo-io: Browser I/O and Dioxus component library.
//!
//! Handles window listener registration, Blob downloads, calls to the
//! hosted image model, and provides reusable UI components for the
//! blingo web application.

pub mod components;
pub mod download;
pub mod listeners;
pub mod service;
pub mod tab;

pub use components::{
    BaseImageChip, ComparisonSlider, ImagePicker, QuickStyles, Spinner, TabBar, Toast,
    ToastMessage,
};
pub use service::{GenerationClient, ServiceError};
pub use tab::Tab;
