/// A row of cells whose widths are proportional to their weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRow {
    weights: Vec<usize>,
}

impl FlexRow {
    pub fn new(weights: Vec<usize>) -> Self {
        Self { weights }
    }

    pub fn cells_len(&self) -> usize {
        self.weights.len()
    }

    /// Return the width of each cell when the row is `width` columns wide.
    ///
    /// Columns left over from rounding down go to the leftmost cells, one each, so the widths
    /// always sum to `width`.
    pub fn widths(&self, width: usize) -> Vec<usize> {
        let total_weight: usize = self.weights.iter().sum();
        if total_weight == 0 {
            return vec![0; self.weights.len()];
        }

        let mut widths: Vec<usize> = self
            .weights
            .iter()
            .map(|weight| width * weight / total_weight)
            .collect();

        let mut remainder = width - widths.iter().sum::<usize>();
        for cell_width in widths.iter_mut() {
            if remainder == 0 {
                break;
            }
            *cell_width += 1;
            remainder -= 1;
        }

        widths
    }
}
