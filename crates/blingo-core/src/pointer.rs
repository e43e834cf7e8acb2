//! Input normalization for mouse and touch.
//!
//! Browser mouse and touch events carry their coordinates in different
//! shapes.  The adapters here reduce both to a [`PointerSample`] so the
//! slider only ever sees a single client-space X coordinate.

use std::fmt;

use crate::slider::SliderInput;

/// Which input modality produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse or other precise pointer.
    Mouse,
    /// Finger on a touch screen.
    Touch,
}

/// A pointer position normalized to a client-space X coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Horizontal position in client (viewport) coordinates.
    pub client_x: f64,
    /// Modality the sample came from.
    pub source: PointerSource,
}

impl PointerSample {
    /// Sample from a mouse event's client X.
    #[must_use]
    pub const fn mouse(client_x: f64) -> Self {
        Self {
            client_x,
            source: PointerSource::Mouse,
        }
    }

    /// Sample from the first active touch point.
    ///
    /// Returns `None` when no touches are active (e.g. a `touchmove`
    /// delivered after the last finger lifted).
    #[must_use]
    pub fn first_touch(client_xs: impl IntoIterator<Item = f64>) -> Option<Self> {
        client_xs.into_iter().next().map(|client_x| Self {
            client_x,
            source: PointerSource::Touch,
        })
    }
}

/// Window-level events a mounted slider listens to.
///
/// These are registered on the window rather than the slider container
/// so a drag that leaves the container keeps tracking until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalEvent {
    /// `mousemove`
    MouseMove,
    /// `mouseup`
    MouseUp,
    /// `touchmove`
    TouchMove,
    /// `touchend`
    TouchEnd,
    /// `touchcancel` (the system took the touch away; treated as a release).
    TouchCancel,
}

impl GlobalEvent {
    /// Every event a slider registers, in registration order.
    pub const ALL: [Self; 5] = [
        Self::MouseMove,
        Self::MouseUp,
        Self::TouchMove,
        Self::TouchEnd,
        Self::TouchCancel,
    ];

    /// DOM event type name.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }

    /// Input modality that fires this event.
    #[must_use]
    pub const fn source(self) -> PointerSource {
        match self {
            Self::MouseMove | Self::MouseUp => PointerSource::Mouse,
            Self::TouchMove | Self::TouchEnd | Self::TouchCancel => PointerSource::Touch,
        }
    }

    /// Whether this event carries a pointer position the slider needs.
    #[must_use]
    pub const fn needs_position(self) -> bool {
        matches!(self, Self::MouseMove | Self::TouchMove)
    }

    /// Translate a window event into a slider input.
    ///
    /// Release events ignore `sample`.  Move events without a sample
    /// (no active touch) produce no input.
    #[must_use]
    pub fn to_input(self, sample: Option<PointerSample>) -> Option<SliderInput> {
        match self {
            Self::MouseMove | Self::TouchMove => sample.map(|s| SliderInput::Move(s.client_x)),
            Self::MouseUp | Self::TouchEnd | Self::TouchCancel => Some(SliderInput::PressEnd),
        }
    }
}

impl fmt::Display for GlobalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_and_touch_normalize_to_the_same_move() {
        let mouse = PointerSample::mouse(42.0);
        let touch = PointerSample::first_touch([42.0, 300.0]);
        assert_eq!(
            GlobalEvent::MouseMove.to_input(Some(mouse)),
            GlobalEvent::TouchMove.to_input(touch),
        );
    }

    #[test]
    fn first_touch_wins() {
        let sample = PointerSample::first_touch([7.5, 99.0]);
        assert_eq!(
            sample,
            Some(PointerSample {
                client_x: 7.5,
                source: PointerSource::Touch,
            })
        );
    }

    #[test]
    fn no_touches_yields_no_input() {
        let sample = PointerSample::first_touch(std::iter::empty());
        assert_eq!(sample, None);
        assert_eq!(GlobalEvent::TouchMove.to_input(sample), None);
    }

    #[test]
    fn every_release_ends_the_drag() {
        for event in [GlobalEvent::MouseUp, GlobalEvent::TouchEnd, GlobalEvent::TouchCancel] {
            assert_eq!(event.to_input(None), Some(SliderInput::PressEnd), "{event}");
            assert!(!event.needs_position());
        }
    }

    #[test]
    fn dom_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for event in GlobalEvent::ALL {
            assert!(seen.insert(event.dom_name()), "duplicate DOM name: {event}");
        }
    }

    #[test]
    fn sources_match_event_family() {
        assert_eq!(GlobalEvent::MouseMove.source(), PointerSource::Mouse);
        assert_eq!(GlobalEvent::TouchCancel.source(), PointerSource::Touch);
    }
}
