//! String helpers.
use unicode_segmentation::UnicodeSegmentation;

/// Return the string truncated with dots if it has more than `max` graphemes.
///
/// `"hello world"` truncated to 10 is `"hello w..."`.
pub fn truncate(string: &str, max: usize) -> String {
    let graphemes: Vec<&str> = string.graphemes(true).collect();
    if graphemes.len() <= max {
        return string.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    graphemes[..max - 3].concat() + "..."
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello world", 10, "hello w..."; "a string that is too long")]
    #[test_case("hello", 5, "hello"; "a string that just fits")]
    #[test_case("hi", 5, "hi"; "a short string")]
    #[test_case("", 5, ""; "an empty string")]
    #[test_case("hello", 2, ".."; "a limit shorter than the dots")]
    #[test_case("hello", 0, ""; "no room at all")]
    #[test_case("héllo wörld", 8, "héllo..."; "multibyte characters")]
    fn test_truncate(string: &str, max: usize, expected: &str) {
        assert_eq!(truncate(string, max), expected);
    }
}
