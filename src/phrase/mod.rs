//! The grammar-phrase catalogue: a longest-match engine over a
//! compositionally generated table of multi-morpheme grammar patterns
//! (spec.md §4.3).
//!
//! The original Python prototype's actual phrase-data tables were filtered
//! out of the retrieval pack as data rather than code (confirmed:
//! `original_source/services/conjugation/phrases.py` is a two-line stub with
//! no `COMPOUND_PHRASES`/`PHRASE_BASES` body), so the catalogue contents
//! below are an implementation decision recorded in DESIGN.md, authored to
//! satisfy spec.md §8's worked scenarios (なければならない and its "must/have
//! to" siblings, そう-family conjecture/hearsay endings).

use std::collections::HashMap;

/// One compositional base: a stem plus the grammar-family meaning it carries
/// before any ending variant is appended.
pub struct PhraseBase {
    pub stem: &'static str,
    pub ending_key: &'static str,
    pub base_meaning: &'static str,
}

/// One ending paradigm: a named family of interchangeable endings, each
/// contributing its own suffix label to the composed meaning.
pub struct EndingVariant {
    pub surface: &'static str,
    pub suffix_label: &'static str,
}

fn ending_paradigm(key: &str) -> &'static [EndingVariant] {
    match key {
        "must" => &[
            EndingVariant { surface: "なければならない", suffix_label: "" },
            EndingVariant { surface: "なければなりません", suffix_label: " (polite)" },
            EndingVariant { surface: "なくてはいけない", suffix_label: "" },
            EndingVariant { surface: "なくてはいけません", suffix_label: " (polite)" },
            EndingVariant { surface: "なくちゃいけない", suffix_label: " (casual)" },
            EndingVariant { surface: "ないといけない", suffix_label: "" },
        ],
        "souda_conjecture" => &[
            EndingVariant { surface: "そうだ", suffix_label: "" },
            EndingVariant { surface: "そうです", suffix_label: " (polite)" },
        ],
        _ => &[],
    }
}

/// Compositional bases, each expanded against its ending paradigm. Grounded
/// on spec.md §4.3's `PhraseBase`/`EndingParadigm` construction and the
/// worked scenario なければならない/日本語を勉強しなければなりません.
const BASES: &[PhraseBase] = &[
    PhraseBase { stem: "", ending_key: "must", base_meaning: "must; have to" },
    PhraseBase { stem: "", ending_key: "souda_conjecture", base_meaning: "looks like; seems" },
];

/// Hand-written patterns that don't fit the compositional scheme (spec.md
/// §4.3: "Add a fixed hand-written table of patterns that do not fit the
/// compositional scheme").
const HAND_WRITTEN: &[(&str, &str)] = &[
    ("ものだ", "used to; it's a fact that"),
    ("わけだ", "it means that; no wonder"),
    ("はずだ", "should be; supposed to"),
    ("んじゃない", "isn't it; I think"),
    ("かもしれない", "might; perhaps"),
];

/// One entry in the catalogue: its matched text, composed meaning, and
/// character length (used to sort a bucket longest-first).
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    pub text: String,
    pub meaning: String,
    char_len: usize,
}

/// The built catalogue: phrases bucketed by the first kana of their surface
/// text, each bucket sorted by descending length for longest-match (spec.md
/// §4.3).
#[derive(Debug, Default)]
pub struct PhraseCatalogue {
    buckets: HashMap<char, Vec<PhraseEntry>>,
}

impl PhraseCatalogue {
    /// Build the catalogue from the compositional bases plus the
    /// hand-written table.
    pub fn build() -> PhraseCatalogue {
        let mut catalogue = PhraseCatalogue::default();

        for base in BASES {
            for variant in ending_paradigm(base.ending_key) {
                let text = format!("{}{}", base.stem, variant.surface);
                let meaning = format!("{}{}", base.base_meaning, variant.suffix_label);
                catalogue.insert(text, meaning);
            }
        }

        for &(text, meaning) in HAND_WRITTEN {
            catalogue.insert(text.to_string(), meaning.to_string());
        }

        for bucket in catalogue.buckets.values_mut() {
            bucket.sort_by(|a, b| b.char_len.cmp(&a.char_len));
        }

        catalogue
    }

    fn insert(&mut self, text: String, meaning: String) {
        let Some(first) = text.chars().next() else {
            return;
        };
        let char_len = text.chars().count();
        self.buckets.entry(first).or_default().push(PhraseEntry { text, meaning, char_len });
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Try to match a phrase starting at morpheme `i`. Returns the matched
    /// phrase text, its meaning, and the number of morphemes consumed.
    ///
    /// Grounded on spec.md §4.3's match function: buckets are keyed by the
    /// first kana of `morphemes[i].surface()`, candidates tried longest
    /// first within the bucket, `consumed` is the smallest morpheme count
    /// whose concatenated surface covers the phrase length.
    pub fn try_match<M>(&self, morphemes: &[M], i: usize) -> Option<(String, String, usize)>
    where
        M: crate::morpheme::Morpheme,
    {
        let first = morphemes.get(i)?.surface().chars().next()?;
        let bucket = self.buckets.get(&first)?;

        let window_end = (i + 10).min(morphemes.len());
        let mut concatenated = String::new();
        let mut boundaries = Vec::with_capacity(window_end - i);
        for m in &morphemes[i..window_end] {
            concatenated.push_str(m.surface());
            boundaries.push(concatenated.chars().count());
        }

        for candidate in bucket {
            if concatenated.starts_with(&candidate.text) {
                let consumed = boundaries.iter().position(|&len| len >= candidate.char_len)? + 1;
                return Some((candidate.text.clone(), candidate.meaning.clone(), consumed));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::{OwnedMorpheme, PosTags};

    fn m(surface: &str) -> OwnedMorpheme {
        OwnedMorpheme {
            surface: surface.to_string(),
            dictionary_form: surface.to_string(),
            reading: String::new(),
            pos: PosTags::new(["助動詞"]),
        }
    }

    #[test]
    fn matches_nakerebanarimasen() {
        let catalogue = PhraseCatalogue::build();
        let morphemes = vec![m("な"), m("けれ"), m("ば"), m("なり"), m("ませ"), m("ん")];
        let (text, meaning, consumed) = catalogue.try_match(&morphemes, 0).unwrap();
        assert_eq!(text, "なければなりません");
        assert_eq!(meaning, "must; have to (polite)");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn longest_match_commitment() {
        // なければならない (shorter, plain) is a strict prefix-incompatible
        // sibling of なければなりません (longer, polite) in the same bucket;
        // when the input actually admits the longer one, it must win.
        let catalogue = PhraseCatalogue::build();
        let morphemes = vec![m("な"), m("けれ"), m("ば"), m("なら"), m("ない")];
        let (text, _, _) = catalogue.try_match(&morphemes, 0).unwrap();
        assert_eq!(text, "なければならない");
    }

    #[test]
    fn no_match_returns_none() {
        let catalogue = PhraseCatalogue::build();
        let morphemes = vec![m("猫"), m("が")];
        assert!(catalogue.try_match(&morphemes, 0).is_none());
    }
}
