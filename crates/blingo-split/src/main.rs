//! Render a still before/after split: the "after" image on the left of
//! the divider, the "before" image on the right, exactly as the
//! comparison slider shows them at a given position.

use std::path::PathBuf;

use blingo_core::ComparisonSlider;
use clap::Parser;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Render a before/after split image with a divider line and handle.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The "before" image; sets the output dimensions.
    before: PathBuf,

    /// The "after" image; resized to match "before" if needed.
    after: PathBuf,

    /// Output image path (PNG recommended).
    #[arg(short, long)]
    output: PathBuf,

    /// Divider position as a percentage of the width (0 = all before,
    /// 100 = all after).
    #[arg(long, value_name = "PERCENT", default_value_t = 50.0)]
    position: f64,

    /// Divider line width.
    ///
    /// Absolute pixels (e.g. "2px") or percentage of image width (e.g. "0.5%").
    #[arg(long, value_name = "WIDTH", default_value = "2px")]
    divider_width: String,

    /// Draw only the divider line, without the round handle.
    #[arg(long)]
    no_handle: bool,
}

// ---------------------------------------------------------------------------
// Divider-width parsing
// ---------------------------------------------------------------------------

/// Parsed divider-width specification.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DividerWidth {
    /// Absolute pixel count in the output image.
    Pixels(f64),
    /// Percentage of the output image width.
    Percent(f64),
}

impl DividerWidth {
    fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(px_str) = s.strip_suffix("px") {
            let val: f64 = px_str
                .parse()
                .map_err(|e| format!("invalid pixel value '{px_str}': {e}"))?;
            if !(val > 0.0 && val.is_finite()) {
                return Err(format!("divider width must be positive, got {val}"));
            }
            Ok(Self::Pixels(val))
        } else if let Some(pct_str) = s.strip_suffix('%') {
            let val: f64 = pct_str
                .parse()
                .map_err(|e| format!("invalid percentage value '{pct_str}': {e}"))?;
            if !(val > 0.0 && val.is_finite()) {
                return Err(format!("divider width percentage must be positive, got {val}"));
            }
            Ok(Self::Percent(val))
        } else {
            Err(format!("divider width must end with 'px' or '%', got: '{s}'"))
        }
    }

    fn resolve(self, image_width: u32) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => pct / 100.0 * f64::from(image_width),
        }
    }
}

// ---------------------------------------------------------------------------
// Compositing
// ---------------------------------------------------------------------------

/// Copy the revealed columns of `after` over `before`.
///
/// Both images must have the same dimensions.
fn composite(before: &RgbaImage, after: &RgbaImage, slider: ComparisonSlider) -> RgbaImage {
    let (width, height) = before.dimensions();
    let revealed = slider.revealed_width(width);
    let mut output = before.clone();
    for y in 0..height {
        for x in 0..revealed {
            output.put_pixel(x, y, *after.get_pixel(x, y));
        }
    }
    output
}

/// Radius of the divider handle for an image of the given size.
fn handle_radius(width: u32, height: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let short_side = width.min(height) as f32;
    (short_side * 0.04).clamp(8.0, 48.0)
}

/// Render the divider line (and optionally the handle) on a transparent
/// background.
///
/// `tiny-skia` handles anti-aliasing; the result is converted from
/// premultiplied to straight alpha for compositing with `image`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn render_divider(
    width: u32,
    height: u32,
    slider: ComparisonSlider,
    line_width: f64,
    handle: bool,
) -> RgbaImage {
    let blank = || RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return blank();
    };

    let center_x = (slider.divider_offset() / 100.0 * f64::from(width)) as f32;
    let center_y = height as f32 / 2.0;
    let half = (line_width / 2.0) as f32;

    let mut white = Paint::default();
    white.set_color_rgba8(255, 255, 255, 255);
    white.anti_alias = true;

    if let Some(rect) = Rect::from_ltrb(center_x - half, 0.0, center_x + half, height as f32) {
        pixmap.fill_rect(rect, &white, Transform::identity(), None);
    }

    if handle {
        let radius = handle_radius(width, height);
        if let Some(circle) = PathBuilder::from_circle(center_x, center_y, radius) {
            pixmap.fill_path(&circle, &white, FillRule::Winding, Transform::identity(), None);

            let mut rim = Paint::default();
            rim.set_color_rgba8(0, 0, 0, 96);
            rim.anti_alias = true;
            let stroke = Stroke {
                width: (radius * 0.08).max(1.0),
                ..Stroke::default()
            };
            pixmap.stroke_path(&circle, &rim, &stroke, Transform::identity(), None);
        }

        // Left/right arrowheads inside the handle.
        let mut dark = Paint::default();
        dark.set_color_rgba8(17, 17, 17, 255);
        dark.anti_alias = true;
        let tip = radius * 0.6;
        let back = radius * 0.2;
        let spread = radius * 0.3;
        for dir in [-1.0_f32, 1.0] {
            let mut pb = PathBuilder::new();
            pb.move_to(dir.mul_add(tip, center_x), center_y);
            pb.line_to(dir.mul_add(back, center_x), center_y - spread);
            pb.line_to(dir.mul_add(back, center_x), center_y + spread);
            pb.close();
            if let Some(arrow) = pb.finish() {
                pixmap.fill_path(&arrow, &dark, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    let data = pixmap.data();
    let mut img = RgbaImage::new(width, height);
    for (i, pixel) in img.pixels_mut().enumerate() {
        let off = i * 4;
        let a = data[off + 3];
        if a == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        } else {
            // Un-premultiply: channel = premultiplied * 255 / alpha.
            let r = u16::from(data[off]) * 255 / u16::from(a);
            let g = u16::from(data[off + 1]) * 255 / u16::from(a);
            let b = u16::from(data[off + 2]) * 255 / u16::from(a);
            *pixel = Rgba([r as u8, g as u8, b as u8, a]);
        }
    }
    img
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let divider_width =
        DividerWidth::parse(&args.divider_width).map_err(|e| format!("--divider-width: {e}"))?;
    if !(0.0..=100.0).contains(&args.position) {
        eprintln!(
            "Position {} is outside 0..=100; clamping",
            args.position
        );
    }
    let slider = ComparisonSlider::at(args.position);

    eprintln!("Reading before image from {}", args.before.display());
    let before = image::open(&args.before)?.to_rgba8();
    eprintln!("Reading after image from {}", args.after.display());
    let mut after = image::open(&args.after)?.to_rgba8();

    let (width, height) = before.dimensions();
    if after.dimensions() != (width, height) {
        let (aw, ah) = after.dimensions();
        eprintln!("Resizing after image from {aw}x{ah} to {width}x{height}...");
        after = imageops::resize(&after, width, height, FilterType::Lanczos3);
    }

    let line_width = divider_width.resolve(width);
    eprintln!(
        "Size: {width}x{height}, position: {:.1}%, divider: {line_width:.1}px, handle: {}",
        slider.position(),
        !args.no_handle,
    );

    eprintln!("Compositing...");
    let mut output = composite(&before, &after, slider);
    let divider = render_divider(width, height, slider, line_width, !args.no_handle);
    imageops::overlay(&mut output, &divider, 0, 0);

    eprintln!("Saving to {}", args.output.display());
    output.save(&args.output)?;

    eprintln!("Done.");
    Ok(())
}
