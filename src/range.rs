use core::{
    cmp::min,
    ops::{Bound, RangeBounds},
};

/// Translates a range of logical indices into a starting index and a word count.
///
/// Both ends are clamped to `capacity`, so the result never reaches past the buffer.
pub(crate) fn translate_range<Range>(range: Range, capacity: usize) -> (usize, usize)
where
    Range: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(start) => *start,
        Bound::Excluded(start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(end) => end.saturating_add(1),
        Bound::Excluded(end) => *end,
        Bound::Unbounded => capacity,
    };
    let start = min(start, capacity);
    (start, min(end, capacity).saturating_sub(start))
}

#[cfg(test)]
mod tests {
    use super::translate_range;
    use more_ranges::{
        RangeFromExclusive, RangeFromExclusiveToExclusive, RangeFromExclusiveToInclusive,
    };

    const CAPACITY: usize = 1024;

    #[test]
    fn unbounded_unbounded() {
        assert_eq!(translate_range(.., CAPACITY), (0, 1024));
    }

    #[test]
    fn unbounded_included() {
        assert_eq!(translate_range(..=42, CAPACITY), (0, 43));
    }

    #[test]
    fn unbounded_excluded() {
        assert_eq!(translate_range(..42, CAPACITY), (0, 42));
    }

    #[test]
    fn included_unbounded() {
        assert_eq!(translate_range(42.., CAPACITY), (42, 982));
    }

    #[test]
    fn included_included() {
        assert_eq!(translate_range(42..=100, CAPACITY), (42, 59));
    }

    #[test]
    fn included_excluded() {
        assert_eq!(translate_range(42..100, CAPACITY), (42, 58));
    }

    #[test]
    fn excluded_unbounded() {
        assert_eq!(
            translate_range(RangeFromExclusive { start: 42 }, CAPACITY),
            (43, 981)
        );
    }

    #[test]
    fn excluded_included() {
        assert_eq!(
            translate_range(
                RangeFromExclusiveToInclusive {
                    start: 42,
                    end: 100
                },
                CAPACITY
            ),
            (43, 58)
        );
    }

    #[test]
    fn excluded_excluded() {
        assert_eq!(
            translate_range(
                RangeFromExclusiveToExclusive {
                    start: 42,
                    end: 100
                },
                CAPACITY
            ),
            (43, 57)
        );
    }

    #[test]
    fn end_past_capacity() {
        assert_eq!(translate_range(1000..5000, CAPACITY), (1000, 24));
    }

    #[test]
    fn start_past_capacity() {
        assert_eq!(translate_range(2000.., CAPACITY), (1024, 0));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn reversed() {
        assert_eq!(translate_range(100..42, CAPACITY), (100, 0));
    }

    #[test]
    fn saturating_bounds() {
        assert_eq!(translate_range(..=usize::MAX, CAPACITY), (0, 1024));
        assert_eq!(
            translate_range(RangeFromExclusive { start: usize::MAX }, CAPACITY),
            (1024, 0)
        );
    }
}
