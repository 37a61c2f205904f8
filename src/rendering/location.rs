#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }
}
