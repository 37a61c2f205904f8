use std::cmp;
use std::ops::Range;

/// Return the range of entries that are drawn.
///
/// The range starts `max_entries_shown` entries above the selected entry (or at the first entry)
/// and reaches a quarter of the height past the selection window, so the selected entry is
/// always drawn when `height` is at least 4.
pub fn visible_range(
    selected: usize,
    len: usize,
    max_entries_shown: usize,
    height: usize,
) -> Range<usize> {
    let start = selected.saturating_sub(max_entries_shown);
    let stop = cmp::min(len, start + max_entries_shown + height / 4);
    start..stop
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(0, 10, 15, 20, 0..10; "everything fits")]
    #[test_case(0, 100, 15, 20, 0..20; "the top of a long list")]
    #[test_case(15, 100, 15, 20, 0..20; "the selection at the edge of the window")]
    #[test_case(16, 100, 15, 20, 1..21; "the selection past the window")]
    #[test_case(99, 100, 15, 20, 84..100; "the bottom of a long list")]
    #[test_case(0, 0, 15, 20, 0..0; "no entries")]
    fn test_visible_range(
        selected: usize,
        len: usize,
        max_entries_shown: usize,
        height: usize,
        expected: Range<usize>,
    ) {
        assert_eq!(visible_range(selected, len, max_entries_shown, height), expected);
    }

    #[test]
    fn test_selection_is_always_visible() {
        for height in 4..40 {
            let max_entries_shown = height * 3 / 4;
            for selected in 0..60 {
                let range = visible_range(selected, 60, max_entries_shown, height);
                assert!(range.contains(&selected), "{} in {:?}", selected, range);
            }
        }
    }
}
