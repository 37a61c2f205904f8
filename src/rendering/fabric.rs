use super::{Size, Yarn};

use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

/// A rectangular grid of styled characters, stored as one yarn per row.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Fabric {
    size: Size,
    rows: Vec<Yarn>,
}

impl Fabric {
    /// Return a blank fabric of the given size.
    #[cfg(test)]
    pub fn new(size: Size) -> Self {
        let rows = vec![Yarn::repeat(' ', size.columns); size.rows];
        Fabric { size, rows }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rows(&self) -> &Vec<Yarn> {
        &self.rows
    }

    /// Pad the bottom of the fabric with blank rows until it has `new_rows` rows.
    ///
    /// Fabrics that already have at least `new_rows` rows are left unchanged.
    pub fn pad_bottom(&mut self, new_rows: usize) {
        while self.rows.len() < new_rows {
            self.rows.push(Yarn::repeat(' ', self.size.columns));
        }
        self.size.rows = self.rows.len();
    }

    /// Truncate or pad the fabric so that it is exactly `size`.
    pub fn resize(&mut self, size: Size) {
        self.rows.truncate(size.rows);
        self.size.rows = self.rows.len();
        self.pad_bottom(size.rows);
        for row in self.rows.iter_mut() {
            row.resize(size.columns);
        }
        self.size = size;
    }

    /// Place `other` below this fabric.
    pub fn quilt_bottom(mut self, other: Fabric) -> Fabric {
        self.size.rows += other.size.rows;
        self.size.columns = self.size.columns.max(other.size.columns);
        self.rows.extend(other.rows);
        self
    }

    /// Place `other` to the right of this fabric.
    ///
    /// Rows of this fabric are padded to its width first so that the columns of `other` line up.
    pub fn quilt_right(self, other: Fabric) -> Fabric {
        let columns = self.size.columns;
        let rows_count = self.size.rows.max(other.size.rows);

        let rows: Vec<Yarn> = self
            .rows
            .into_iter()
            .pad_using(rows_count, |_| Yarn::new())
            .zip(other.rows.into_iter().pad_using(rows_count, |_| Yarn::new()))
            .map(|(mut left, right)| {
                left.resize(columns);
                left.concat(right)
            })
            .collect();

        Fabric {
            size: Size::new(rows_count, columns + other.size.columns),
            rows,
        }
    }
}

impl From<Vec<Yarn>> for Fabric {
    fn from(rows: Vec<Yarn>) -> Self {
        let columns: usize = rows.iter().map(Yarn::width).max().unwrap_or(0);
        let size = Size::new(rows.len(), columns);
        Fabric { size, rows }
    }
}

impl From<Yarn> for Fabric {
    fn from(row: Yarn) -> Self {
        Fabric::from(vec![row])
    }
}

/// The characters of the fabric with rows separated by newlines (styles are dropped).
impl Display for Fabric {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        let text = self
            .rows
            .iter()
            .map(|row| row.characters().iter().collect::<String>())
            .join("\n");
        write!(formatter, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(
        Fabric::new(Size::new(2, 3)),
        Fabric::new(Size::new(1, 3)),
        Fabric::new(Size::new(3, 3))
    )]
    fn test_quilt_bottom(fabric: Fabric, other: Fabric, expected: Fabric) {
        let result = fabric.quilt_bottom(other);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_quilt_right_aligns_columns() {
        let left = Fabric::new(Size::new(1, 3)).quilt_bottom(Fabric::from(Yarn::from("ab")));
        let right = Fabric::from(vec![Yarn::from("x"), Yarn::from("y"), Yarn::from("z")]);

        let result = left.quilt_right(right);

        assert_eq!(result.size(), Size::new(3, 4));
        assert_eq!(result.to_string(), "   x\nab y\n   z");
    }

    #[test]
    fn test_resize() {
        let mut fabric = Fabric::from(vec![Yarn::from("abc"), Yarn::from("d"), Yarn::from("e")]);
        fabric.resize(Size::new(2, 2));

        assert_eq!(fabric.size(), Size::new(2, 2));
        assert_eq!(fabric.to_string(), "ab\nd ");
    }

    #[test]
    fn test_pad_bottom() {
        let mut fabric = Fabric::from(Yarn::from("ab"));
        fabric.pad_bottom(3);

        assert_eq!(fabric.size(), Size::new(3, 2));
        assert_eq!(fabric.to_string(), "ab\n  \n  ");
    }
}
