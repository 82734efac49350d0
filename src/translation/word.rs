//! Word-level transliteration into gopher language.

use super::TranslateError;

/// Letters that count as vowels. `y` is always a vowel here.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

const VOWEL_PREFIX: &str = "g";
const XR_PREFIX: &str = "ge";
const SUFFIX: &str = "ogo";

/// Returns the byte offset of the first vowel in `word`.
fn find_vowel(word: &str) -> Option<usize> {
    word.char_indices()
        .find(|(_, c)| VOWELS.contains(c))
        .map(|(i, _)| i)
}

/// Transliterates a single word.
///
/// The word is folded to lowercase, then the first matching rule applies:
///
/// 1. no vowel: the word is returned unchanged (`"gym"` has one, `"psst"` does not)
/// 2. vowel first: prefixed with `g` (`"apple"` -> `"gapple"`)
/// 3. starts with `xr`: prefixed with `ge` (`"xray"` -> `"gexray"`)
/// 4. `qu` ending at the first vowel: the leading three letters move to the
///    end, followed by `ogo` (`"square"` -> `"aresquogo"`)
/// 5. otherwise the consonants before the first vowel move to the end,
///    followed by `ogo` (`"chair"` -> `"airchogo"`)
///
/// # Errors
///
/// Returns [`TranslateError::EmptyWord`] if `word` is empty.
pub fn transform(word: &str) -> Result<String, TranslateError> {
    if word.is_empty() {
        return Err(TranslateError::EmptyWord);
    }

    let word = word.to_lowercase();
    let Some(vowel_pos) = find_vowel(&word) else {
        return Ok(word);
    };

    let translated = if vowel_pos == 0 {
        format!("{VOWEL_PREFIX}{word}")
    } else if word.starts_with("xr") {
        format!("{XR_PREFIX}{word}")
    } else if vowel_pos == 2 && word.get(1..3) == Some("qu") {
        // vowel_pos == 2 means byte 2 is the ASCII 'u', so 3 is a char boundary
        format!("{}{}{SUFFIX}", &word[3..], &word[..3])
    } else {
        format!("{}{}{SUFFIX}", &word[vowel_pos..], &word[..vowel_pos])
    };

    Ok(translated)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_first_gets_g_prefix() {
        assert_eq!(transform("apple").unwrap(), "gapple");
        assert_eq!(transform("ear").unwrap(), "gear");
        assert_eq!(transform("oak").unwrap(), "goak");
    }

    #[test]
    fn test_y_is_a_vowel() {
        assert_eq!(transform("yellow").unwrap(), "gyellow");
        assert_eq!(transform("gym").unwrap(), "ymgogo");
    }

    #[test]
    fn test_single_vowel_word() {
        assert_eq!(transform("a").unwrap(), "ga");
        assert_eq!(transform("I").unwrap(), "gi");
    }

    #[test]
    fn test_no_vowel_passes_through_lowercased() {
        assert_eq!(transform("psst").unwrap(), "psst");
        assert_eq!(transform("BRR").unwrap(), "brr");
        assert_eq!(transform("42").unwrap(), "42");
    }

    #[test]
    fn test_xr_prefix() {
        assert_eq!(transform("xray").unwrap(), "gexray");
        assert_eq!(transform("XRAY").unwrap(), "gexray");
    }

    #[test]
    fn test_xr_wins_over_qu_position() {
        // vowel at position 2 would otherwise select the general rule
        assert_eq!(transform("xrua").unwrap(), "gexrua");
    }

    #[test]
    fn test_qu_rule() {
        assert_eq!(transform("square").unwrap(), "aresquogo");
        assert_eq!(transform("squeal").unwrap(), "ealsquogo");
    }

    #[test]
    fn test_qu_rule_needs_vowel_at_two() {
        // "quick": first vowel is the 'u' at position 1, so the general rule applies
        assert_eq!(transform("quick").unwrap(), "uickqogo");
    }

    #[test]
    fn test_general_rule() {
        assert_eq!(transform("chair").unwrap(), "airchogo");
        assert_eq!(transform("hello").unwrap(), "ellohogo");
        assert_eq!(transform("string").unwrap(), "ingstrogo");
    }

    #[test]
    fn test_input_is_lowercased() {
        assert_eq!(transform("Chair").unwrap(), "airchogo");
        assert_eq!(transform("APPLE").unwrap(), "gapple");
    }

    #[test]
    fn test_non_ascii_consonants_are_kept() {
        assert_eq!(transform("ñandu").unwrap(), "anduñogo");
    }

    #[test]
    fn test_empty_word_is_rejected() {
        assert_eq!(transform(""), Err(TranslateError::EmptyWord));
    }
}
