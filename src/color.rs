use crossterm::style::Color;

use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Deserialize;

const DARK_GREY: Color = Color::Rgb {
    r: 96,
    g: 96,
    b: 96,
};

const LIGHT_GREY: Color = Color::Rgb {
    r: 159,
    g: 159,
    b: 159,
};

const EVEN_ROW_GREY: Color = Color::Rgb {
    r: 38,
    g: 38,
    b: 38,
};

const FOLDER_BLUE: Color = Color::Rgb {
    r: 97,
    g: 175,
    b: 239,
};

/// The colors used to draw the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub selected_foreground: Color,
    pub selected_background: Color,
    pub even_row_background: Color,
    pub folder: Color,
    pub hidden_folder: Color,
    pub hidden_file: Color,
    pub text: Color,
    /// The foreground of the path and status bars.
    pub bar_foreground: Color,
    /// The background of the path and status bars.
    pub bar_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected_foreground: Color::Black,
            selected_background: Color::Yellow,
            even_row_background: EVEN_ROW_GREY,
            folder: FOLDER_BLUE,
            hidden_folder: DARK_GREY,
            hidden_file: LIGHT_GREY,
            text: Color::White,
            bar_foreground: Color::Black,
            bar_background: Color::White,
        }
    }
}

/// A color as written in the configuration file.
///
/// Either a name such as `"yellow"` or `"dark_grey"`, or a hex code such as `"#ff8800"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct ConfigColor(Color);

impl From<ConfigColor> for Color {
    fn from(color: ConfigColor) -> Color {
        color.0
    }
}

impl TryFrom<String> for ConfigColor {
    type Error = ParseColorError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        parse_color(&string).map(ConfigColor)
    }
}

/// Parse a color name or a `#rrggbb` hex code.
pub fn parse_color(string: &str) -> Result<Color, ParseColorError> {
    let normalized = string
        .trim()
        .to_lowercase()
        .replace(|c: char| c == '-' || c == ' ', "_");

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ParseColorError(string.to_string()));
    }

    let color = match normalized.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return Err(ParseColorError(string.to_string())),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl Display for ParseColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(
            f,
            "\"{}\" is not a color name or a hex code like \"#ff8800\".",
            self.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case("yellow", Color::Yellow; "a plain name")]
    #[test_case("Dark Grey", Color::DarkGrey; "a name with spaces and capitals")]
    #[test_case("dark-gray", Color::DarkGrey; "a name with a dash and american spelling")]
    #[test_case("#ff8800", Color::Rgb { r: 255, g: 136, b: 0 }; "a hex code")]
    #[test_case("#FF8800", Color::Rgb { r: 255, g: 136, b: 0 }; "an uppercase hex code")]
    fn test_parse_color(string: &str, expected: Color) {
        assert_eq!(parse_color(string), Ok(expected));
    }

    #[test_case("chartreuse"; "an unknown name")]
    #[test_case("#ff88"; "a short hex code")]
    #[test_case("#gg8800"; "a hex code with bad digits")]
    #[test_case(""; "an empty string")]
    fn test_parse_color_error(string: &str) {
        assert!(parse_color(string).is_err());
    }
}
