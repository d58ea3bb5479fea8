//! Correction of common misspellings and abbreviations in queries.

use crate::numbers::compile;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Known misspellings and abbreviations, and their canonical forms.
///
/// Keys made only of word characters are replaced as whole words. Any other key is a phrase, and
/// is replaced wherever it occurs, even inside a longer word.
const TABLE: &[(&str, &str)] = &[
    // nouns and verbs of word problems
    ("appel", "apple"),
    ("appels", "apples"),
    ("giv", "give"),
    ("lef", "left"),
    ("tota", "total"),
    ("totl", "total"),
    ("numer", "number"),
    ("equels", "equals"),
    ("prise", "price"),
    ("pluss", "plus"),
    ("tree", "three"),
    ("fiv", "five"),
    ("devided by", "divided by"),
    ("multipled by", "multiplied by"),

    // operations
    ("solv", "solve"),
    ("intergrate", "integrate"),
    ("sqr", "sqrt"),
    ("squareroot", "square root"),
    ("perimiter", "perimeter"),
    ("bace", "base"),

    // statistics
    ("bigest", "biggest"),
    ("maxium", "maximum"),
    ("avrg", "average"),
    ("avg", "average"),
    ("averge", "average"),
    ("medain", "median"),
    ("stdev", "standard deviation"),
    ("std dev", "standard deviation"),
    ("std deviation", "standard deviation"),
    ("standart deviation", "standard deviation"),

    // descriptive numbers
    ("digited", "digit"),
    ("two digited", "two-digit"),
    ("two digit", "two-digit"),

    // notation
    ("²", "^2"),
];

/// A compiled entry of the correction table.
#[derive(Debug)]
struct Correction {
    pattern: Regex,
    replacement: &'static str,
}

/// The correction table, longest keys first so that phrases are replaced before the words in
/// them.
static CORRECTIONS: Lazy<Vec<Correction>> = Lazy::new(|| {
    let mut entries = TABLE.to_vec();
    entries.sort_by(|(a, _), (b, _)| {
        b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
    });

    entries.into_iter()
        .map(|(wrong, right)| {
            let escaped = regex::escape(wrong);
            let pattern = if is_word(wrong) {
                format!(r"\b{}\b", escaped)
            } else {
                escaped
            };
            Correction { pattern: compile(&pattern), replacement: right }
        })
        .collect()
});

/// A key made only of word characters, as `\b` understands them.
static WORD: Lazy<Regex> = Lazy::new(|| compile(r"^\w+$"));

/// Returns true if the key should only be matched as a whole word.
///
/// Characters such as `²` are alphanumeric but not word characters, so a `\b` never follows
/// them; keys containing them are phrases.
fn is_word(key: &str) -> bool {
    WORD.is_match(key)
}

/// Lowercases the text and corrects every known misspelling or abbreviation in it.
///
/// Normalizing text that is already normalized returns it unchanged.
pub fn normalize(text: &str) -> String {
    let mut corrected = text.to_lowercase();
    for correction in CORRECTIONS.iter() {
        if correction.pattern.is_match(&corrected) {
            trace!(pattern = correction.pattern.as_str(), replacement = correction.replacement, "spelling correction");
            corrected = correction.pattern
                .replace_all(&corrected, correction.replacement)
                .into_owned();
        }
    }
    corrected
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn abbreviation() {
        let normalized = normalize("avrg of 4 and 6");
        assert!(normalized.contains("average"));
        assert_eq!(normalized, "average of 4 and 6");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("SOLV 2X + 4 = 10"), "solve 2x + 4 = 10");
    }

    #[test]
    fn whole_words_only() {
        // `sqr` is a key, but `sqrt` and `square` must be left alone
        assert_eq!(normalize("sqrt 16 and square"), "sqrt 16 and square");
        assert_eq!(normalize("sqr 16"), "sqrt 16");
        assert_eq!(normalize("a tree"), "a three");
        assert_eq!(normalize("street"), "street");
    }

    #[test]
    fn phrases_before_words() {
        assert_eq!(normalize("largest two digited number"), "largest two-digit number");
        assert_eq!(normalize("std dev of 1, 2, 3"), "standard deviation of 1, 2, 3");
        assert_eq!(normalize("standart deviation of 1, 2"), "standard deviation of 1, 2");
    }

    #[test]
    fn superscript() {
        assert!(!is_word("²"));
        assert!(is_word("avrg"));
        assert!(!is_word("std dev"));
        assert_eq!(normalize("solve x² - 4 = 0"), "solve x^2 - 4 = 0");
        assert_eq!(normalize("solve 2x²=8"), "solve 2x^2=8");
    }

    #[test]
    fn idempotent() {
        let queries = [
            "avrg of 4 and 6",
            "John has 5 appels and givs 2, how many are lef?",
            "Largest two digited number minus smallest two digit number",
            "stdev of 2, 4, 4, 4, 5",
            "intergrate x² dx",
            "convert 1010 bace 2 to bace 10",
            "smallest tree digit number",
        ];
        for query in queries {
            let once = normalize(query);
            assert_eq!(normalize(&once), once, "normalizing `{}` twice", query);
        }
    }
}
