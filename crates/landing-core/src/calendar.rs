/// Featured slide per calendar month, indexed by zero-based month
/// (0 = January). December opens the season, January and February follow;
/// the off-season months fall back to the December schedule.
const FEATURED_BY_MONTH: [usize; 12] = [
    1, // January
    2, // February
    0, 0, 0, 0, 0, 0, 0, 0, 0, // March..November
    0, // December
];

/// Slide to open with for the given zero-based month. Out-of-range months
/// resolve to the first slide.
#[inline]
pub fn featured_slide_for_month(month0: u32) -> usize {
    FEATURED_BY_MONTH
        .get(month0 as usize)
        .copied()
        .unwrap_or(0)
}

/// Resolve the opening slide: an in-range explicit override wins, otherwise
/// the month table decides. The result is clamped to the slide count.
pub fn initial_slide(override_index: Option<usize>, month0: u32, slide_count: usize) -> usize {
    match override_index {
        Some(i) if i < slide_count => i,
        _ => {
            let featured = featured_slide_for_month(month0);
            if featured < slide_count {
                featured
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winter_months_feature_their_own_schedule() {
        assert_eq!(featured_slide_for_month(11), 0);
        assert_eq!(featured_slide_for_month(0), 1);
        assert_eq!(featured_slide_for_month(1), 2);
    }

    #[test]
    fn off_season_and_garbage_fall_back_to_first() {
        for m in 2..11 {
            assert_eq!(featured_slide_for_month(m), 0, "month {m}");
        }
        assert_eq!(featured_slide_for_month(12), 0);
        assert_eq!(featured_slide_for_month(u32::MAX), 0);
    }

    #[test]
    fn override_wins_only_when_in_range() {
        assert_eq!(initial_slide(Some(2), 0, 3), 2);
        assert_eq!(initial_slide(Some(3), 0, 3), 1);
        assert_eq!(initial_slide(None, 1, 3), 2);
        // a shorter table never yields an out-of-range slide
        assert_eq!(initial_slide(None, 1, 2), 0);
    }
}
