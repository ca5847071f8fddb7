//! Deterministic resolution of free-text labels against table keys.
//!
//! Labels are normalized (lowercase, ASCII punctuation as spaces, whitespace collapsed) and
//! resolved in three passes, first hit wins:
//!
//! 1. exact key,
//! 2. exact synonym,
//! 3. the longest key or synonym found as a whole-word phrase inside the label. Equal lengths
//!    go to the entry listed first in the table.

use std::collections::HashMap;

pub(crate) fn normalize_label(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    Exact,
    Synonym,
    Phrase,
}

#[derive(Debug, Clone)]
struct Phrase {
    words: Vec<String>,
    len: usize,
    entry: usize,
}

/// Lookup index over table entries, each identified by its position in the table.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabelIndex {
    keys: HashMap<String, usize>,
    synonyms: HashMap<String, usize>,
    phrases: Vec<Phrase>,
}

impl LabelIndex {
    /// Build from `(key, synonyms)` pairs in table order. Later duplicates never shadow
    /// earlier entries.
    pub(crate) fn build<'a, I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a String>,
    {
        let mut index = LabelIndex::default();

        for (entry, (key, synonyms)) in entries.into_iter().enumerate() {
            let key = normalize_label(key);
            if !key.is_empty() {
                index.keys.entry(key.clone()).or_insert(entry);
                index.push_phrase(key, entry);
            }

            for synonym in synonyms {
                let synonym = normalize_label(synonym);
                if synonym.is_empty() {
                    continue;
                }
                index.synonyms.entry(synonym.clone()).or_insert(entry);
                index.push_phrase(synonym, entry);
            }
        }

        index
    }

    fn push_phrase(&mut self, phrase: String, entry: usize) {
        self.phrases.push(Phrase {
            len: phrase.len(),
            words: phrase.split(' ').map(str::to_string).collect(),
            entry,
        });
    }

    pub(crate) fn resolve(&self, label: &str) -> Option<(usize, MatchKind)> {
        let label = normalize_label(label);
        if label.is_empty() {
            return None;
        }

        if let Some(entry) = self.keys.get(&label) {
            return Some((*entry, MatchKind::Exact));
        }
        if let Some(entry) = self.synonyms.get(&label) {
            return Some((*entry, MatchKind::Synonym));
        }

        let words: Vec<&str> = label.split(' ').collect();
        let mut best: Option<&Phrase> = None;
        for phrase in &self.phrases {
            if !contains_phrase(&words, &phrase.words) {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    phrase.len > current.len
                        || (phrase.len == current.len && phrase.entry < current.entry)
                }
            };
            if better {
                best = Some(phrase);
            }
        }

        best.map(|phrase| (phrase.entry, MatchKind::Phrase))
    }
}

fn contains_phrase(words: &[&str], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > words.len() {
        return false;
    }
    words
        .windows(phrase.len())
        .any(|window| window.iter().zip(phrase).all(|(word, part)| *word == part))
}
