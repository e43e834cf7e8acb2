//! Before/after comparison slider state machine.
//!
//! The slider tracks a single divider [`position`](ComparisonSlider::position)
//! (percent of container width, 0 to 100) and whether a drag is in
//! progress.  Every input arrives as a [`SliderInput`] carrying at most a
//! client-space X coordinate, so mouse and touch share one path into
//! [`position_from_pointer`].
//!
//! Container geometry is never stored here.  Callers pass a measuring
//! closure that is invoked only when an input actually needs geometry,
//! which keeps idle pointer moves free of layout queries while still
//! measuring fresh on every event that repositions the divider.

/// Divider position a freshly constructed slider starts at.
pub const INITIAL_POSITION: f64 = 50.0;

/// Horizontal placement of the slider container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Left edge of the container.
    left: f64,
    /// Width of the container (always positive and finite).
    width: f64,
}

impl Geometry {
    /// Create a geometry from a measured left edge and width.
    ///
    /// Returns `None` when the container has no usable extent: a
    /// non-positive width (not laid out yet, `display: none`) or
    /// non-finite values.
    #[must_use]
    pub fn new(left: f64, width: f64) -> Option<Self> {
        (left.is_finite() && width.is_finite() && width > 0.0).then_some(Self { left, width })
    }

    /// Left edge of the container.
    #[must_use]
    pub const fn left(self) -> f64 {
        self.left
    }

    /// Width of the container.
    #[must_use]
    pub const fn width(self) -> f64 {
        self.width
    }
}

/// Map a client-space X coordinate to a divider position in percent.
///
/// The pointer offset from the container's left edge is clamped to
/// `[0, width]` before scaling, so the result is always within
/// `[0, 100]` even when the pointer has left the container mid-drag.
/// A NaN coordinate maps to `0`.
#[must_use]
pub fn position_from_pointer(pointer_x: f64, geometry: Geometry) -> f64 {
    let offset = pointer_x - geometry.left;
    let relative = if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, geometry.width)
    };
    relative / geometry.width * 100.0
}

/// One normalized slider input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInput {
    /// A press began over the slider container.
    PressStart,
    /// The pointer moved to this client X coordinate.
    Move(f64),
    /// A press ended somewhere in the viewport.
    PressEnd,
    /// A click or tap landed at this client X coordinate.
    Activate(f64),
}

/// State of one comparison slider instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSlider {
    position: f64,
    dragging: bool,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
            dragging: false,
        }
    }
}

impl ComparisonSlider {
    /// Current divider position in percent of the container width.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Whether a press is currently held.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a drag.  The divider does not move until the first
    /// [`pointer_move`](Self::pointer_move).
    pub const fn press_start(&mut self) {
        self.dragging = true;
    }

    /// Track a pointer move.
    ///
    /// Only repositions the divider while dragging; `measure` is not
    /// called otherwise.  Returns `true` if the position changed.
    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        measure: impl FnOnce() -> Option<Geometry>,
    ) -> bool {
        if !self.dragging {
            return false;
        }
        self.reposition(pointer_x, measure)
    }

    /// End a drag, wherever the release happened.
    pub const fn press_end(&mut self) {
        self.dragging = false;
    }

    /// Jump the divider to a click/tap location, independent of drag state.
    ///
    /// Returns `true` if the position changed.
    pub fn direct_activate(
        &mut self,
        pointer_x: f64,
        measure: impl FnOnce() -> Option<Geometry>,
    ) -> bool {
        self.reposition(pointer_x, measure)
    }

    /// Dispatch a normalized input.  Returns `true` if any state changed.
    pub fn apply(&mut self, input: SliderInput, measure: impl FnOnce() -> Option<Geometry>) -> bool {
        match input {
            SliderInput::PressStart => {
                let was = self.dragging;
                self.press_start();
                !was
            }
            SliderInput::Move(x) => self.pointer_move(x, measure),
            SliderInput::PressEnd => {
                let was = self.dragging;
                self.press_end();
                was
            }
            SliderInput::Activate(x) => self.direct_activate(x, measure),
        }
    }

    /// CSS `clip-path` value that reveals the "after" layer from the
    /// container's left edge up to the divider.
    #[must_use]
    pub fn after_clip_path(&self) -> String {
        format!("inset(0 {}% 0 0)", 100.0 - self.position)
    }

    /// Horizontal offset of the divider, in percent, for a CSS `left:`.
    #[must_use]
    pub const fn divider_offset(&self) -> f64 {
        self.position
    }

    /// Number of pixel columns of the "after" image revealed in a
    /// raster `total_width` pixels wide.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn revealed_width(&self, total_width: u32) -> u32 {
        let columns = (f64::from(total_width) * self.position / 100.0).round();
        (columns.clamp(0.0, f64::from(total_width))) as u32
    }

    /// Build a slider with the divider at `position`, clamped to `[0, 100]`.
    ///
    /// Used by consumers that render a fixed split rather than tracking
    /// input (the split composite CLI).
    #[must_use]
    pub fn at(position: f64) -> Self {
        let position = if position.is_nan() {
            INITIAL_POSITION
        } else {
            position.clamp(0.0, 100.0)
        };
        Self {
            position,
            dragging: false,
        }
    }

    fn reposition(&mut self, pointer_x: f64, measure: impl FnOnce() -> Option<Geometry>) -> bool {
        let Some(geometry) = measure() else {
            return false;
        };
        let next = position_from_pointer(pointer_x, geometry);
        #[allow(clippy::float_cmp)]
        let changed = next != self.position;
        self.position = next;
        changed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn geometry(left: f64, width: f64) -> Option<Geometry> {
        Geometry::new(left, width)
    }

    fn at_200() -> Option<Geometry> {
        geometry(0.0, 200.0)
    }

    // --- position_from_pointer ---

    #[test]
    fn quarter_of_container() {
        let g = Geometry::new(0.0, 200.0).unwrap();
        assert!((position_from_pointer(50.0, g) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn far_left_clamps_to_zero() {
        let g = Geometry::new(0.0, 200.0).unwrap();
        assert!(position_from_pointer(-1000.0, g).abs() < f64::EPSILON);
    }

    #[test]
    fn far_right_clamps_to_hundred() {
        let g = Geometry::new(0.0, 200.0).unwrap();
        assert!((position_from_pointer(1000.0, g) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_container_is_relative_to_left_edge() {
        let g = Geometry::new(100.0, 400.0).unwrap();
        assert!((position_from_pointer(300.0, g) - 50.0).abs() < f64::EPSILON);
        assert!(position_from_pointer(50.0, g).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_pointer_stays_in_range() {
        let g = Geometry::new(0.0, 200.0).unwrap();
        assert!(position_from_pointer(f64::NAN, g).abs() < f64::EPSILON);
        assert!((position_from_pointer(f64::INFINITY, g) - 100.0).abs() < f64::EPSILON);
        assert!(position_from_pointer(f64::NEG_INFINITY, g).abs() < f64::EPSILON);
    }

    #[test]
    fn unusable_geometry_is_rejected() {
        assert!(Geometry::new(0.0, 0.0).is_none());
        assert!(Geometry::new(0.0, -5.0).is_none());
        assert!(Geometry::new(f64::NAN, 100.0).is_none());
        assert!(Geometry::new(0.0, f64::INFINITY).is_none());
    }

    // --- state machine ---

    #[test]
    fn starts_centered_and_idle() {
        let s = ComparisonSlider::default();
        assert!((s.position() - 50.0).abs() < f64::EPSILON);
        assert!(!s.is_dragging());
    }

    #[test]
    fn press_start_does_not_move_divider() {
        let mut s = ComparisonSlider::default();
        s.press_start();
        assert!(s.is_dragging());
        assert!((s.position() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn idle_move_is_ignored_without_measuring() {
        let mut s = ComparisonSlider::default();
        let mut measured = false;
        let changed = s.pointer_move(10.0, || {
            measured = true;
            at_200()
        });
        assert!(!changed);
        assert!(!measured, "idle moves must not query geometry");
        assert!((s.position() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drag_tracks_moves() {
        let mut s = ComparisonSlider::default();
        s.press_start();
        assert!(s.pointer_move(50.0, at_200));
        assert!((s.position() - 25.0).abs() < f64::EPSILON);
        assert!(s.pointer_move(150.0, at_200));
        assert!((s.position() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn release_terminates_drag() {
        let mut s = ComparisonSlider::default();
        s.press_start();
        s.pointer_move(20.0, at_200);
        s.press_end();
        let after_release = s.position();
        assert!(!s.pointer_move(180.0, at_200));
        assert!((s.position() - after_release).abs() < f64::EPSILON);
        assert!((after_release - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drag_outside_container_keeps_tracking_clamped() {
        let mut s = ComparisonSlider::default();
        s.press_start();
        s.pointer_move(-400.0, at_200);
        assert!(s.position().abs() < f64::EPSILON);
        s.pointer_move(900.0, at_200);
        assert!((s.position() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn direct_activation_ignores_drag_state() {
        let mut idle = ComparisonSlider::default();
        assert!(idle.direct_activate(150.0, at_200));
        assert!((idle.position() - 75.0).abs() < f64::EPSILON);
        assert!(!idle.is_dragging());

        let mut dragging = ComparisonSlider::default();
        dragging.press_start();
        assert!(dragging.direct_activate(150.0, at_200));
        assert!((dragging.position() - 75.0).abs() < f64::EPSILON);
        assert!(dragging.is_dragging());
    }

    #[test]
    fn direct_activation_measures_once_per_event() {
        let mut s = ComparisonSlider::default();
        let mut calls = 0;
        s.direct_activate(30.0, || {
            calls += 1;
            at_200()
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn missing_geometry_is_a_silent_noop() {
        let mut s = ComparisonSlider::default();
        s.press_start();
        assert!(!s.pointer_move(10.0, || None));
        assert!(!s.direct_activate(10.0, || None));
        assert!((s.position() - 50.0).abs() < f64::EPSILON);
        assert!(s.is_dragging());
    }

    #[test]
    fn geometry_is_measured_per_event() {
        // Container resizes between two moves; each move uses the new size.
        let mut s = ComparisonSlider::default();
        s.press_start();
        s.pointer_move(100.0, at_200);
        assert!((s.position() - 50.0).abs() < f64::EPSILON);
        s.pointer_move(100.0, || geometry(0.0, 400.0));
        assert!((s.position() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_reports_changes() {
        let mut s = ComparisonSlider::default();
        assert!(!s.apply(SliderInput::Move(10.0), at_200));
        assert!(s.apply(SliderInput::PressStart, at_200));
        assert!(!s.apply(SliderInput::PressStart, at_200));
        assert!(s.apply(SliderInput::Move(10.0), at_200));
        assert!(!s.apply(SliderInput::Move(10.0), at_200));
        assert!(s.apply(SliderInput::PressEnd, at_200));
        assert!(!s.apply(SliderInput::PressEnd, at_200));
        assert!(s.apply(SliderInput::Activate(200.0), at_200));
        assert!((s.position() - 100.0).abs() < f64::EPSILON);
    }

    // --- rendering helpers ---

    #[test]
    fn clip_path_hides_right_of_divider() {
        let mut s = ComparisonSlider::default();
        assert_eq!(s.after_clip_path(), "inset(0 50% 0 0)");
        s.direct_activate(50.0, at_200);
        assert_eq!(s.after_clip_path(), "inset(0 75% 0 0)");
        assert!((s.divider_offset() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn revealed_width_scales_and_rounds() {
        assert_eq!(ComparisonSlider::at(50.0).revealed_width(201), 101);
        assert_eq!(ComparisonSlider::at(0.0).revealed_width(640), 0);
        assert_eq!(ComparisonSlider::at(100.0).revealed_width(640), 640);
        assert_eq!(ComparisonSlider::at(25.0).revealed_width(0), 0);
    }

    #[test]
    fn fixed_position_is_clamped() {
        assert!((ComparisonSlider::at(140.0).position() - 100.0).abs() < f64::EPSILON);
        assert!(ComparisonSlider::at(-3.0).position().abs() < f64::EPSILON);
        assert!((ComparisonSlider::at(f64::NAN).position() - INITIAL_POSITION).abs() < f64::EPSILON);
    }
}
