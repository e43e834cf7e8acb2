//! Workflow tabs and their display metadata.

use std::fmt;

/// One of the two workflows offered in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Enhance an uploaded photo and compare before/after.
    #[default]
    Enhancer,
    /// Generate a new image from a prompt and optional base image.
    Generator,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 2] = [Self::Enhancer, Self::Generator];

    /// Full display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enhancer => "Photo Enhancer",
            Self::Generator => "Photo Generator",
        }
    }

    /// Message shown under the spinner while this tab's request runs.
    #[must_use]
    pub const fn busy_message(self) -> &'static str {
        match self {
            Self::Enhancer => "Enhancing your masterpiece...",
            Self::Generator => "Generating your vision...",
        }
    }

    /// Message shown when this tab's service call fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Enhancer => "Failed to enhance image due to an API error.",
            Self::Generator => "Failed to generate image due to an API error.",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
