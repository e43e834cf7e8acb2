//! Property tests: the divider stays in range and tracks only while dragging.

#![allow(clippy::unwrap_used)]

use blingo_core::{
    ComparisonSlider, Geometry, GlobalEvent, PointerSample, SliderInput, position_from_pointer,
};
use proptest::prelude::*;

fn geometry() -> impl Strategy<Value = Geometry> {
    (-5_000.0f64..5_000.0, 0.5f64..4_000.0).prop_map(|(left, width)| Geometry::new(left, width).unwrap())
}

fn pointer() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e9f64..1.0e9,
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
    ]
}

fn input() -> impl Strategy<Value = SliderInput> {
    prop_oneof![
        Just(SliderInput::PressStart),
        Just(SliderInput::PressEnd),
        pointer().prop_map(SliderInput::Move),
        pointer().prop_map(SliderInput::Activate),
    ]
}

proptest! {
    #[test]
    fn position_is_always_in_range(x in pointer(), g in geometry()) {
        let p = position_from_pointer(x, g);
        prop_assert!((0.0..=100.0).contains(&p), "position {p} out of range");
    }

    #[test]
    fn position_is_a_pure_function_of_its_inputs(x in pointer(), g in geometry()) {
        let a = position_from_pointer(x, g);
        let b = position_from_pointer(x, g);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn inside_pointer_maps_linearly(t in 0.0f64..=1.0, g in geometry()) {
        let x = t.mul_add(g.width(), g.left());
        let p = position_from_pointer(x, g);
        prop_assert!((p - t * 100.0).abs() < 1e-6, "expected {} got {p}", t * 100.0);
    }

    #[test]
    fn any_input_sequence_keeps_position_in_range(
        inputs in prop::collection::vec(input(), 0..64),
        g in geometry(),
    ) {
        let mut slider = ComparisonSlider::default();
        for i in inputs {
            slider.apply(i, || Some(g));
            prop_assert!((0.0..=100.0).contains(&slider.position()));
        }
    }

    #[test]
    fn moves_after_release_are_ignored(
        during in pointer(),
        after in prop::collection::vec(pointer(), 1..16),
        g in geometry(),
    ) {
        let mut slider = ComparisonSlider::default();
        slider.apply(SliderInput::PressStart, || Some(g));
        slider.apply(SliderInput::Move(during), || Some(g));
        slider.apply(SliderInput::PressEnd, || Some(g));
        let settled = slider.position();
        for x in after {
            slider.apply(SliderInput::Move(x), || Some(g));
        }
        prop_assert_eq!(slider.position().to_bits(), settled.to_bits());
    }

    #[test]
    fn idle_moves_never_change_position(
        xs in prop::collection::vec(pointer(), 1..16),
        g in geometry(),
    ) {
        let mut slider = ComparisonSlider::default();
        for x in xs {
            prop_assert!(!slider.apply(SliderInput::Move(x), || Some(g)));
        }
        prop_assert_eq!(slider, ComparisonSlider::default());
    }

    #[test]
    fn mouse_and_touch_moves_agree(x in -1.0e6f64..1.0e6, g in geometry()) {
        let mut by_mouse = ComparisonSlider::default();
        let mut by_touch = ComparisonSlider::default();
        by_mouse.press_start();
        by_touch.press_start();

        let mouse = GlobalEvent::MouseMove.to_input(Some(PointerSample::mouse(x))).unwrap();
        let touch = GlobalEvent::TouchMove
            .to_input(PointerSample::first_touch([x]))
            .unwrap();
        by_mouse.apply(mouse, || Some(g));
        by_touch.apply(touch, || Some(g));
        prop_assert_eq!(by_mouse, by_touch);
    }
}
