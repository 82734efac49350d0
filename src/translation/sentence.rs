//! Sentence-level transliteration.

use super::{TranslateError, transform};

/// Transliterates a whole sentence.
///
/// The last character after trimming is treated as the end sign and is
/// reattached verbatim. The rest is split on single spaces and each word is
/// transliterated; only the first word is capitalized.
///
/// # Errors
///
/// Returns [`TranslateError::EmptySentence`] if nothing is left after
/// trimming, and [`TranslateError::EmptyWord`] if splitting yields an empty
/// word (e.g. two consecutive spaces).
pub fn transform_sentence(sentence: &str) -> Result<String, TranslateError> {
    let sentence = sentence.trim();

    let mut chars = sentence.chars();
    let end_sign = chars.next_back().ok_or(TranslateError::EmptySentence)?;
    let body = chars.as_str();

    let mut translated = body
        .split(' ')
        .enumerate()
        .map(|(i, word)| transform(word).map(|w| if i == 0 { capitalize(&w) } else { w }))
        .collect::<Result<Vec<_>, TranslateError>>()?
        .join(" ");

    translated.push(end_sign);
    Ok(translated)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sentence() {
        assert_eq!(transform_sentence("I see.").unwrap(), "Gi eesogo.");
    }

    #[test]
    fn test_only_first_word_capitalized() {
        assert_eq!(
            transform_sentence("The quick apple!").unwrap(),
            "Ethogo uickqogo gapple!"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(transform_sentence("  chair? \n").unwrap(), "Airchogo?");
    }

    #[test]
    fn test_end_sign_is_not_validated() {
        // the last character is detached even when it is a letter
        assert_eq!(transform_sentence("hello world").unwrap(), "Ellohogo orlwogod");
    }

    #[test]
    fn test_capitalize_keeps_rest() {
        assert_eq!(capitalize("gexray"), "Gexray");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_empty_sentence_is_rejected() {
        assert_eq!(transform_sentence(""), Err(TranslateError::EmptySentence));
        assert_eq!(transform_sentence("   "), Err(TranslateError::EmptySentence));
    }

    #[test]
    fn test_lone_end_sign_is_rejected() {
        assert_eq!(transform_sentence("."), Err(TranslateError::EmptyWord));
    }

    #[test]
    fn test_double_space_is_rejected() {
        assert_eq!(
            transform_sentence("red  apple."),
            Err(TranslateError::EmptyWord)
        );
    }
}
