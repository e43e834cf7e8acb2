//! Before/after comparison slider.
//!
//! The "before" image fills the container; the "after" image sits on top
//! and is clipped to the left `position`% of the width.  Dragging the
//! divider (mouse or touch) or clicking anywhere moves it.
//!
//! Every pointer event is reduced to a [`SliderInput`] and fed through a
//! single coroutine that owns the state transitions, so mouse, touch,
//! and element/window listeners all share one code path.

use std::cell::RefCell;
use std::rc::Rc;

use blingo_core::slider::ComparisonSlider as SliderState;
use blingo_core::{GlobalEvent, SliderInput};
use dioxus::html::point_interaction::InteractionLocation;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdArrowLeftRight;
use futures_util::StreamExt;

use crate::listeners::{attach_window_listeners, measure_container, pointer_sample};

/// Props for the [`ComparisonSlider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ComparisonSliderProps {
    /// Image source shown underneath (full width).
    before: String,
    /// Image source revealed left of the divider.
    after: String,
}

/// Interactive before/after comparison of two image sources.
#[component]
pub fn ComparisonSlider(props: ComparisonSliderProps) -> Element {
    let mut state = use_signal(SliderState::default);
    let mut container = use_signal(|| Option::<web_sys::Element>::None);

    let inputs = use_coroutine(move |mut rx: UnboundedReceiver<SliderInput>| async move {
        while let Some(input) = rx.next().await {
            let mut next = *state.peek();
            // Layout is read at event time and only when the input needs it.
            let changed = next.apply(input, || container.peek().as_ref().and_then(measure_container));
            if changed {
                state.set(next);
            }
        }
    });

    // Window-level move/release tracking for the lifetime of this slider.
    let listeners = use_hook(move || {
        let forward = move |event: GlobalEvent, raw: &web_sys::Event| {
            let sample = if event.needs_position() {
                pointer_sample(event, raw)
            } else {
                None
            };
            if let Some(input) = event.to_input(sample) {
                inputs.send(input);
            }
        };
        let set = match attach_window_listeners(forward) {
            Ok(set) => {
                debug!(count = set.len(), "slider window listeners attached");
                Some(set)
            }
            Err(e) => {
                warn!(error = %e, "slider window listeners unavailable; dragging disabled");
                None
            }
        };
        Rc::new(RefCell::new(set))
    });

    use_drop(move || {
        if let Some(set) = listeners.borrow_mut().take() {
            debug!(count = set.len(), "slider window listeners released");
            set.release();
        }
    });

    let slider = state();
    let clip_path = slider.after_clip_path();
    let offset = slider.divider_offset();
    let drag_class = if slider.is_dragging() { " dragging" } else { "" };

    rsx! {
        div {
            class: "comparison{drag_class}",
            role: "slider",
            tabindex: "0",
            aria_label: "Before and after comparison",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{offset:.0}",
            onmounted: move |evt: MountedEvent| {
                container.set(evt.data().downcast::<web_sys::Element>().cloned());
            },
            onmousedown: move |evt: MouseEvent| {
                // Keeps the browser from starting a native image drag.
                evt.prevent_default();
                inputs.send(SliderInput::PressStart);
            },
            ontouchstart: move |_| {
                inputs.send(SliderInput::PressStart);
            },
            onclick: move |evt: MouseEvent| {
                inputs.send(SliderInput::Activate(evt.client_coordinates().x));
            },

            img {
                class: "comparison-image",
                src: "{props.before}",
                alt: "Before",
                draggable: "false",
            }
            div {
                class: "comparison-after",
                style: "clip-path: {clip_path};",
                img {
                    class: "comparison-image",
                    src: "{props.after}",
                    alt: "After",
                    draggable: "false",
                }
            }
            div {
                class: "comparison-divider",
                style: "left: {offset}%;",
                div { class: "comparison-handle",
                    Icon { icon: LdArrowLeftRight, width: 20, height: 20 }
                }
            }
            span { class: "comparison-label comparison-label-after", "After" }
            span { class: "comparison-label comparison-label-before", "Before" }
        }
    }
}
