use crossterm::style::Color;
use std::iter;

/// Return the number of terminal cells `character` takes up, treating pictographs as wide.
pub fn cell_width(character: char) -> usize {
    match character as u32 {
        0x1F300..=0x1FAFF => 2,
        _ => 1,
    }
}

/// How a single character is drawn.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

/// A single row of styled characters.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Yarn {
    characters: Vec<char>,

    // NOTE: The styles are allowed to be shorter than the number of characters. Missing styles
    // are the default style.
    styles: Vec<Style>,
}

impl Yarn {
    /// Return a new yarn of zero length.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Return a yarn consisting of unstylized copies of `character`.
    pub fn repeat(character: char, len: usize) -> Self {
        Self {
            characters: vec![character; len],
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Return the number of terminal cells the yarn takes up.
    pub fn width(&self) -> usize {
        self.characters.iter().copied().map(cell_width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Add the other yarn to the end of this one and return the new yarn.
    pub fn concat(mut self, other: Self) -> Self {
        let len_before: usize = self.len();
        self.characters.extend(other.characters);

        if !other.styles.is_empty() {
            self.styles.resize(len_before, Style::default());
            self.styles.extend(other.styles);
        }

        self
    }

    /// Truncate or pad with spaces so that the yarn is `new_width` cells wide.
    ///
    /// A wide character that would straddle the edge is dropped and replaced by padding.
    pub fn resize(&mut self, new_width: usize) {
        let mut width: usize = 0;
        let mut kept: usize = 0;
        for character in &self.characters {
            let character_width = cell_width(*character);
            if width + character_width > new_width {
                break;
            }
            width += character_width;
            kept += 1;
        }

        self.characters.truncate(kept);
        self.styles.truncate(kept);
        self.characters.extend(iter::repeat(' ').take(new_width - width));
    }

    /// Apply `change` to the style of every character.
    fn restyle(&mut self, change: impl Fn(&mut Style)) {
        self.styles.resize(self.len(), Style::default());
        self.styles.iter_mut().for_each(change);
    }

    pub fn color(&mut self, color: Color) {
        self.restyle(|style| style.color = Some(color));
    }

    pub fn background(&mut self, color: Color) {
        self.restyle(|style| style.background = Some(color));
    }

    pub fn bold(&mut self) {
        self.restyle(|style| style.bold = true);
    }

    pub fn underline(&mut self) {
        self.restyle(|style| style.underline = true);
    }

    pub fn characters(&self) -> &Vec<char> {
        &self.characters
    }

    /// Return the style of the character at `position`.
    pub fn style_at(&self, position: usize) -> Style {
        self.styles.get(position).copied().unwrap_or_default()
    }
}

impl From<String> for Yarn {
    fn from(string: String) -> Self {
        Yarn::from(string.as_str())
    }
}

impl From<&str> for Yarn {
    fn from(string: &str) -> Self {
        let characters: Vec<char> = string.chars().collect();
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

impl From<Vec<char>> for Yarn {
    fn from(characters: Vec<char>) -> Self {
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(Yarn::from("foo"), 5, "foo  "; "padding with spaces")]
    #[test_case(Yarn::from("foobar"), 3, "foo"; "truncating")]
    #[test_case(Yarn::from("foo"), 3, "foo"; "the same length")]
    #[test_case(Yarn::new(), 2, "  "; "an empty yarn")]
    #[test_case(Yarn::from("📁 ab"), 4, "📁 a"; "truncating after a wide character")]
    #[test_case(Yarn::from("a📁"), 2, "a "; "a wide character on the edge")]
    #[test_case(Yarn::from("📁"), 4, "📁  "; "padding after a wide character")]
    fn test_resize(mut yarn: Yarn, new_len: usize, expected: &str) {
        yarn.resize(new_len);

        assert_eq!(yarn, Yarn::from(expected));
    }

    #[test_case('a', 1; "ascii")]
    #[test_case('─', 1; "box drawing")]
    #[test_case('📁', 2; "folder")]
    #[test_case('🔗', 2; "link")]
    fn test_cell_width(character: char, expected: usize) {
        assert_eq!(cell_width(character), expected);
    }

    #[test]
    fn test_width_counts_cells() {
        assert_eq!(Yarn::from("📄 notes").width(), 8);
        assert_eq!(Yarn::from("📄 notes").len(), 7);
    }

    #[test]
    fn test_concat_keeps_styles_aligned() {
        let mut styled = Yarn::from("b");
        styled.color(Color::Black);

        let result = Yarn::from("a").concat(styled);

        assert_eq!(result.characters(), &vec!['a', 'b']);
        assert_eq!(result.style_at(0), Style::default());
        assert_eq!(result.style_at(1).color, Some(Color::Black));
    }

    #[test]
    fn test_styles_cover_padding_added_before_styling() {
        let mut yarn = Yarn::from("ab");
        yarn.resize(4);
        yarn.background(Color::Yellow);
        yarn.bold();

        for position in 0..4 {
            let style = yarn.style_at(position);
            assert_eq!(style.background, Some(Color::Yellow));
            assert!(style.bold);
            assert!(!style.underline);
        }
    }
}
