use super::{Location, Size};

/// A named rectangular region of the terminal that a component was rendered into.
///
/// Zones are used to hit-test mouse events against the component that owns them.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Zone {
    pub location: Location,
    pub size: Size,
}

impl Zone {
    pub fn new(location: Location, size: Size) -> Self {
        Zone { location, size }
    }

    /// Return whether the terminal cell at `(column, row)` lies inside the zone.
    pub fn in_bounds(&self, column: usize, row: usize) -> bool {
        column >= self.location.column
            && column < self.location.column + self.size.columns
            && row >= self.location.row
            && row < self.location.row + self.size.rows
    }

    /// Return the position of the terminal cell relative to the top left of the zone.
    pub fn pos(&self, column: usize, row: usize) -> Option<Location> {
        if !self.in_bounds(column, row) {
            return None;
        }
        Some(Location::new(
            row - self.location.row,
            column - self.location.column,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn zone() -> Zone {
        Zone::new(Location::new(1, 2), Size::new(3, 4))
    }

    #[test_case(2, 1, Some(Location::new(0, 0)); "the top left corner")]
    #[test_case(5, 3, Some(Location::new(2, 3)); "the bottom right corner")]
    #[test_case(1, 1, None; "left of the zone")]
    #[test_case(6, 1, None; "right of the zone")]
    #[test_case(2, 0, None; "above the zone")]
    #[test_case(2, 4, None; "below the zone")]
    fn test_pos(column: usize, row: usize, expected: Option<Location>) {
        assert_eq!(zone().pos(column, row), expected);
    }

    #[test]
    fn test_empty_zone_contains_nothing() {
        assert!(!Zone::default().in_bounds(0, 0));
    }
}
