use crate::application::ports::util::Transliterator;
use slug::slugify;

/// Transliterator backed by the `slug` crate's deunicode tables.
///
/// Its output is already hyphenated ASCII; the domain normalizer still runs
/// over it, so only the transliteration part matters here.
#[derive(Default, Clone)]
pub struct SlugCrateTransliterator;

impl Transliterator for SlugCrateTransliterator {
    fn transliterate(&self, text: &str) -> String {
        slugify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::{SlugNormalizer, format_slug};
    use crate::infrastructure::time::SystemClock;
    use std::sync::Arc;

    fn normalizer() -> SlugNormalizer {
        SlugNormalizer::new(
            Arc::new(SlugCrateTransliterator),
            Arc::new(SystemClock),
        )
    }

    #[test]
    fn accented_latin_is_flattened() {
        assert_eq!(normalizer().normalize("Caf\u{e9} Ren\u{e9}").as_str(), "cafe-rene");
    }

    #[test]
    fn non_latin_scripts_become_ascii() {
        let slug = normalizer().normalize("\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442} \u{43c}\u{438}\u{440}");
        assert_eq!(slug.as_str(), "privet-mir");

        for input in ["\u{65e5}\u{672c}\u{8a9e}\u{306e}\u{30d6}\u{30ed}\u{30b0}", "\u{3b1}\u{3b8}\u{3ae}\u{3bd}\u{3b1}", "Stra\u{df}e & Co."] {
            let slug = normalizer().normalize(input);
            assert!(
                slug.as_str()
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'),
                "{input:?} produced {slug}"
            );
            assert!(!slug.as_str().is_empty());
        }
    }

    #[test]
    fn punctuation_only_falls_back_to_placeholder() {
        let slug = normalizer().normalize("!!! ??? ###");
        let digits = slug.as_str().strip_prefix("item-").expect("placeholder prefix");
        assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn transliterated_output_is_already_formatted() {
        let latin = SlugCrateTransliterator.transliterate("  Multiple   Spaces -- and--dashes  ");
        assert_eq!(format_slug(&latin), "multiple-spaces-and-dashes");
    }
}
