use std::collections::{HashMap, HashSet};

use super::normalizer::Normalizer;
use crate::parse::is_word_char;

/// Which canonical terms occur in a text.
///
/// Built fresh for every text. Only present terms are stored; a lookup for
/// anything else reads `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPresence {
    terms: HashMap<String, bool>,
}

impl TermPresence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the words of `text`, case-fold them, normalize each distinct
    /// word once and mark its canonical form present.
    #[must_use]
    pub fn from_text(text: &str, normalizer: &impl Normalizer) -> Self {
        let mut presence = Self::new();
        let mut seen = HashSet::new();
        for word in extract_terms(text) {
            if seen.contains(&word) {
                continue;
            }
            presence.mark(normalizer.normalize(&word));
            seen.insert(word);
        }
        tracing::debug!(
            words = seen.len(),
            terms = presence.len(),
            "built term presence table"
        );
        presence
    }

    /// Record `term` as present.
    pub fn mark(&mut self, term: impl Into<String>) {
        self.terms.insert(term.into(), true);
    }

    /// Set an explicit value for `term`.
    pub fn insert(&mut self, term: impl Into<String>, present: bool) {
        self.terms.insert(term.into(), present);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn set(mut self, term: &str, present: bool) -> Self {
        self.insert(term, present);
        self
    }

    #[must_use]
    pub fn get(&self, term: &str) -> bool {
        self.terms.get(term).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<HashMap<String, bool>> for TermPresence {
    fn from(terms: HashMap<String, bool>) -> Self {
        Self { terms }
    }
}

impl<S: Into<String>> FromIterator<S> for TermPresence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut presence = Self::new();
        for term in iter {
            presence.mark(term);
        }
        presence
    }
}

/// The case-folded words of `text`, in order, duplicates included.
///
/// A word is a maximal run of alphanumeric characters and underscores;
/// everything else separates words.
pub fn extract_terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
