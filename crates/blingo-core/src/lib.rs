//! blingo-core: Comparison slider and generation model (sans-IO).
//!
//! Holds everything in blingo that can be expressed without a browser:
//! the before/after slider state machine and its input normalization,
//! scoped ownership of global listeners, uploaded/generated image
//! payloads, the `generateContent` request/response model, prompt and
//! filename helpers, and service configuration.
//!
//! This crate has **no I/O dependencies**. All browser, DOM, and network
//! interaction lives in `blingo-io`.

pub mod config;
pub mod generation;
pub mod image_file;
pub mod listeners;
pub mod pointer;
pub mod prompt;
pub mod slider;

pub use config::{ConfigError, ServiceConfig};
pub use generation::{GenerateContentRequest, GenerateContentResponse, GenerationError};
pub use image_file::{GeneratedImage, ImageFile, ImageFileError};
pub use listeners::{Detach, ListenerSet};
pub use pointer::{GlobalEvent, PointerSample, PointerSource};
pub use slider::{ComparisonSlider, Geometry, SliderInput, position_from_pointer};
