//! Prompt text and download filenames.

/// Instruction sent alongside a photo to enhance it.
pub const ENHANCE_INSTRUCTION: &str = "Enhance this photo. Improve brightness, sharpness, and \
overall quality. Reduce noise and upscale the resolution if possible. Make the colors more \
vibrant but keep them natural. The result should look professional and high-quality.";

/// Number of prompt characters kept in a generated image's filename.
const FILENAME_PROMPT_CHARS: usize = 20;

/// A one-click style suffix for the generator prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStyle {
    /// Button label.
    pub name: &'static str,
    /// Text appended to the prompt.
    pub prompt: &'static str,
}

/// Quick styles offered under the prompt box, in display order.
pub const QUICK_STYLES: [QuickStyle; 6] = [
    QuickStyle {
        name: "Anime",
        prompt: "anime style",
    },
    QuickStyle {
        name: "Realistic",
        prompt: "photorealistic",
    },
    QuickStyle {
        name: "Cartoon",
        prompt: "cartoon style",
    },
    QuickStyle {
        name: "Cinematic",
        prompt: "cinematic lighting",
    },
    QuickStyle {
        name: "3D Render",
        prompt: "3D render, high detail",
    },
    QuickStyle {
        name: "Pixel Art",
        prompt: "pixel art",
    },
];

/// Append a style to the prompt, comma-separated.
#[must_use]
pub fn append_style(prompt: &str, style: &str) -> String {
    if prompt.is_empty() {
        style.to_owned()
    } else {
        format!("{prompt}, {style}")
    }
}

/// Download name for an enhanced photo, derived from the upload's name.
#[must_use]
pub fn enhanced_filename(original_name: Option<&str>) -> String {
    let name = original_name.filter(|n| !n.is_empty()).unwrap_or("image.png");
    format!("enhanced-{name}")
}

/// Download name for a generated image.
///
/// Uses the first characters of the prompt with each run of whitespace
/// collapsed to `_`.
#[must_use]
pub fn generated_filename(prompt: &str) -> String {
    let mut stem = String::new();
    let mut in_whitespace = false;
    for c in prompt.chars().take(FILENAME_PROMPT_CHARS) {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }
    if stem.is_empty() {
        stem.push_str("image");
    }
    format!("generated-{stem}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_empty_prompt() {
        assert_eq!(append_style("", "pixel art"), "pixel art");
    }

    #[test]
    fn append_to_existing_prompt() {
        assert_eq!(
            append_style("a cat on a boat", "anime style"),
            "a cat on a boat, anime style"
        );
    }

    #[test]
    fn quick_style_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for style in QUICK_STYLES {
            assert!(seen.insert(style.name), "duplicate style {}", style.name);
            assert!(!style.prompt.is_empty());
        }
    }

    #[test]
    fn enhanced_names() {
        assert_eq!(enhanced_filename(Some("beach.jpg")), "enhanced-beach.jpg");
        assert_eq!(enhanced_filename(None), "enhanced-image.png");
        assert_eq!(enhanced_filename(Some("")), "enhanced-image.png");
    }

    #[test]
    fn generated_name_truncates_and_collapses_whitespace() {
        assert_eq!(
            generated_filename("An astronaut  riding a horse on Mars"),
            "generated-An_astronaut_riding.png"
        );
    }

    #[test]
    fn generated_name_counts_characters_not_bytes() {
        assert_eq!(
            generated_filename("ねこ ねこ ねこ ねこ ねこ ねこ ねこ"),
            "generated-ねこ_ねこ_ねこ_ねこ_ねこ_ねこ_ねこ.png"
        );
    }

    #[test]
    fn generated_name_fallback() {
        assert_eq!(generated_filename(""), "generated-image.png");
    }
}
