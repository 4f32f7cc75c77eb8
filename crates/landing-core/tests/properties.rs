// Property tests for the carousel, swipe classification and phone mask.

use landing_core::phone::format_phone;
use landing_core::*;
use proptest::prelude::*;

#[test]
fn every_month_resolves_inside_the_schedule() {
    for month in 0..12 {
        let i = featured_slide_for_month(month);
        assert!(i < SCHEDULE.len(), "month {month} -> {i}");
    }
}

#[test]
fn schedule_has_three_filled_slides() {
    assert_eq!(SCHEDULE.len(), 3);
    for slide in SCHEDULE {
        assert!(!slide.title.is_empty());
        assert!(!slide.items.is_empty());
        assert!(!slide.bonus.text.is_empty());
    }
}

#[test]
fn sample_phone_is_masked_and_valid() {
    let masked = format_phone("0991234567");
    assert_eq!(masked, "+38(099)123-45-67");
    assert!(is_valid_phone(&masked));
    assert!(!is_valid_phone(&format_phone("123")));
}

proptest! {
    #[test]
    fn next_then_prev_is_identity(len in 1usize..12, start in 0usize..12) {
        let mut c = Carousel::new(len, start).unwrap();
        let before = c.index();
        c.next();
        c.prev();
        prop_assert_eq!(c.index(), before);
        c.prev();
        c.next();
        prop_assert_eq!(c.index(), before);
    }

    #[test]
    fn next_len_times_is_identity(len in 1usize..12, start in 0usize..12) {
        let mut c = Carousel::new(len, start).unwrap();
        let before = c.index();
        for _ in 0..len {
            c.next();
            prop_assert!(c.index() < len);
        }
        prop_assert_eq!(c.index(), before);
    }

    #[test]
    fn swipe_needs_strictly_more_than_threshold(threshold in 1u32..200, start in 0u32..1000) {
        let t = f64::from(threshold);
        let x = f64::from(start);
        let mut tracker = SwipeTracker::new(t);

        tracker.begin(x + t);
        tracker.update(x);
        prop_assert_eq!(tracker.end(), None);

        tracker.begin(x + t + 1.0);
        tracker.update(x);
        prop_assert_eq!(tracker.end(), Some(SwipeDirection::Next));

        tracker.begin(x);
        tracker.update(x + t + 1.0);
        prop_assert_eq!(tracker.end(), Some(SwipeDirection::Prev));
    }

    #[test]
    fn mask_keeps_prefix_and_length(raw in "[0-9 ()+-]{0,24}") {
        let masked = format_phone(&raw);
        prop_assert!(masked.starts_with("+38"));
        prop_assert!(masked.len() <= 17);
        prop_assert_eq!(format_phone(&masked), masked.clone());
    }
}
