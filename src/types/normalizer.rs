/// Maps a word to its canonical dictionary form.
///
/// Implementations must be deterministic and total: every word yields some
/// form, typically the word itself when nothing better is known. A normalizer
/// is built once by the caller (lemmatizers are expensive to load) and
/// borrowed by every check; it is never global.
///
/// Any `Fn(&str) -> String` is a normalizer:
///
/// ```
/// use topicmatch::Normalizer;
///
/// let strip_plural = |w: &str| w.strip_suffix('s').unwrap_or(w).to_owned();
/// assert_eq!(strip_plural.normalize("cities"), "citie");
/// ```
pub trait Normalizer {
    fn normalize(&self, word: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }
}

/// Case-folds the word and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, word: &str) -> String {
        word.to_lowercase()
    }
}
