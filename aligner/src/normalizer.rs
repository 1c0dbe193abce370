use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading and trailing runs of characters which are neither letters, numbers nor `_`.
    static ref OUTER_NON_WORD: Regex =
        Regex::new(r"^[^\p{L}\p{N}_]+|[^\p{L}\p{N}_]+$").unwrap();
}

/// Normalizes a string for comparison with the target word.
///
/// Strips leading and trailing non-word characters and lowercases the remainder. Word characters
/// are unicode letters, unicode numbers (including non-decimal ones like `²`) and `_`. Combining
/// marks don't count as word characters, but non-word characters embedded between word characters
/// are kept. An absent string normalizes to an empty string.
pub fn normalize<'a>(string: impl Into<Option<&'a str>>) -> String {
    string
        .into()
        .map(|string| OUTER_NON_WORD.replace_all(string, "").to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        assert_eq!(normalize(None::<&str>), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!..."), "");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(normalize("BAT"), "bat");
        assert_eq!(normalize("Bat"), "bat");
    }

    #[test]
    fn test_outer_punctuation() {
        assert_eq!(normalize("bat."), "bat");
        assert_eq!(normalize("(bat)"), "bat");
        assert_eq!(normalize(" \"Bat!\" "), "bat");
        assert_eq!(normalize("\tbat\n"), "bat");
    }

    #[test]
    fn test_inner_characters() {
        assert_eq!(normalize("bat-man"), "bat-man");
        assert_eq!(normalize("the bat"), "the bat");
        assert_eq!(normalize("_bat_"), "_bat_");
        assert_eq!(normalize("combat"), "combat");
    }

    #[test]
    fn test_unicode_word_characters() {
        assert_eq!(normalize("«Fledermäuse»"), "fledermäuse");
        assert_eq!(normalize("¿Ñandú?"), "ñandú");
        assert_eq!(normalize("—42—"), "42");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(normalize("²bat"), "²bat");
        assert_eq!(normalize("bat²"), "bat²");
        assert_eq!(normalize("(Ⅻ)"), "ⅻ");
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(normalize("bat\u{301}"), "bat");
        assert_eq!(normalize("\u{301}bat"), "bat");
        assert_eq!(normalize("ba\u{301}t"), "ba\u{301}t");
    }
}
