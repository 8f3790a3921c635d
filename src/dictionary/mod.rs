//! The in-memory dictionary index: a single owned arena of entries plus
//! kanji/kana lookup maps over it, the scoring function that picks the best
//! candidate for a headword, and the name-suffix fallback.
//!
//! Grounded on `original_source/services/jmdict.py`'s `JMDictionary`
//! (`_find_best_entry`, `lookup`, `lookup_details`) point-for-point; the
//! arena+index shape follows spec.md §9's Design Note ("indices as maps from
//! strings to lists of stable references into that arena"), a flattened
//! version of the teacher's `database/mod.rs` swiss-table/trie design once
//! the zerocopy backing is dropped (see DESIGN.md).

pub mod loader;
pub mod schema;

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

/// One kanji or kana surface form on a [`DictEntry`], with its "common word"
/// flag.
#[derive(Debug, Clone)]
pub struct Form {
    pub text: String,
    pub common: bool,
}

/// One sense (word meaning) on a [`DictEntry`].
#[derive(Debug, Clone)]
pub struct Sense {
    pub part_of_speech: Vec<String>,
    pub glosses: Vec<String>,
    pub misc: Vec<String>,
    pub field: Vec<String>,
}

impl Sense {
    pub fn is_counter(&self) -> bool {
        self.part_of_speech.iter().any(|p| p == "ctr")
    }
}

/// A word-dictionary entry, immutable once loaded (spec.md §3).
#[derive(Debug, Clone)]
pub struct DictEntry {
    pub kanji: Vec<Form>,
    pub kana: Vec<Form>,
    pub senses: Vec<Sense>,
}

/// A name-dictionary entry: same shape as [`DictEntry`] but with a flat
/// translation list and a set of name-type tags in place of senses.
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub kanji: Vec<Form>,
    pub kana: Vec<Form>,
    pub translations: Vec<String>,
    pub types: Vec<String>,
}

/// The looked-up details returned to the pipeline: a joined meaning string
/// and a set of learner-friendly tag labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupDetails {
    pub meaning: String,
    pub tags: Vec<String>,
}

/// Map a sense's POS/misc/field tags to learner-facing labels. Grounded on
/// `jmdict.py::lookup_details`'s `POS_TAGS`/`MISC_TAGS` dicts.
fn tags_for_sense(sense: &Sense) -> Vec<String> {
    let mut tags = std::collections::BTreeSet::new();

    for pos in &sense.part_of_speech {
        match pos.as_str() {
            "vt" => {
                tags.insert("Transitive".to_string());
            }
            "vi" => {
                tags.insert("Intransitive".to_string());
            }
            "uk" => {
                tags.insert("Usually Kana".to_string());
            }
            "ctr" => {
                tags.insert("Counter".to_string());
            }
            p if p.contains("adj") => {
                tags.insert("Adjective".to_string());
            }
            _ => {}
        }
    }

    for m in sense.misc.iter().chain(sense.field.iter()) {
        let label = match m.as_str() {
            "uk" => "Usually Kana",
            "sl" => "Slang",
            "col" => "Colloquial",
            "hon" => "Honorific",
            "hum" => "Humble",
            "abbr" => "Abbreviation",
            "comp" => "Computer",
            "med" => "Medical",
            "food" => "Food",
            _ => continue,
        };
        tags.insert(label.to_string());
    }

    tags.into_iter().collect()
}

/// Honorific name suffixes tried, in order, when a plain lookup misses.
/// Grounded on `jmdict.py::JMDictionary._NAME_SUFFIXES`.
const NAME_SUFFIXES: &[&str] = &["さん", "先生", "様", "君", "ちゃん", "殿", "氏", "さま"];

/// Strip combining dakuten/handakuten marks after NFD decomposition, so that
/// e.g. は and ば compare equal modulo voicing (spec.md §4.5).
fn normalize_kana(text: &str) -> String {
    text.nfd()
        .filter(|c| *c != '\u{3099}' && *c != '\u{309a}')
        .collect()
}

fn is_all_hiragana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| ('\u{3040}'..='\u{309f}').contains(&c))
}

/// The static, process-global dictionary index: one entry arena, four lookup
/// maps (word kanji/kana, name kanji/kana).
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    names: Vec<NameEntry>,
    by_kanji: HashMap<String, Vec<u32>>,
    by_kana: HashMap<String, Vec<u32>>,
    names_by_kanji: HashMap<String, Vec<u32>>,
    names_by_kana: HashMap<String, Vec<u32>>,
}

enum Candidate<'a> {
    Word(&'a DictEntry),
    Name(&'a NameEntry),
}

impl Dictionary {
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn names(&self) -> &[NameEntry] {
        &self.names
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Build an index from a parsed [`schema::Dump`] of ordinary dictionary
    /// words (not names). Grounded on `jmdict.py::_load`.
    pub fn from_word_dump(dump: schema::Dump) -> Dictionary {
        let mut dict = Dictionary::default();
        for entry in dump.words {
            let idx = dict.entries.len() as u32;
            let kanji: Vec<Form> = entry
                .kanji
                .iter()
                .map(|k| Form { text: k.text.clone(), common: k.common })
                .collect();
            let kana: Vec<Form> = entry
                .kana
                .iter()
                .map(|k| Form { text: k.text.clone(), common: k.common })
                .collect();
            for k in &kanji {
                dict.by_kanji.entry(k.text.clone()).or_default().push(idx);
            }
            for k in &kana {
                dict.by_kana.entry(k.text.clone()).or_default().push(idx);
            }
            let senses = entry
                .sense
                .iter()
                .map(|s| Sense {
                    part_of_speech: s.part_of_speech.clone(),
                    glosses: s.gloss.iter().map(|g| g.text.clone()).collect(),
                    misc: s.misc.clone(),
                    field: s.field.clone(),
                })
                .collect();
            dict.entries.push(DictEntry { kanji, kana, senses });
        }
        dict
    }

    /// Merge a parsed [`schema::Dump`] of name entries into this index.
    /// Grounded on `jmdict.py::_load_names`.
    pub fn merge_name_dump(&mut self, dump: schema::Dump) {
        for entry in dump.words {
            let idx = self.names.len() as u32;
            let kanji: Vec<Form> = entry
                .kanji
                .iter()
                .map(|k| Form { text: k.text.clone(), common: k.common })
                .collect();
            let kana: Vec<Form> = entry
                .kana
                .iter()
                .map(|k| Form { text: k.text.clone(), common: k.common })
                .collect();
            for k in &kanji {
                self.names_by_kanji.entry(k.text.clone()).or_default().push(idx);
            }
            for k in &kana {
                self.names_by_kana.entry(k.text.clone()).or_default().push(idx);
            }
            let mut translations = Vec::new();
            let mut types = Vec::new();
            for t in &entry.translation {
                for text in &t.translation {
                    translations.push(text.text.clone());
                }
                types.extend(t.kind.iter().cloned());
            }
            self.names.push(NameEntry { kanji, kana, translations, types });
        }
    }

    fn word_candidates(&self, word: &str) -> Vec<&DictEntry> {
        let by_kanji = self.by_kanji.get(word).into_iter().flatten();
        let mut idxs: Vec<u32> = by_kanji.copied().collect();
        if idxs.is_empty() {
            idxs = self.by_kana.get(word).into_iter().flatten().copied().collect();
        }
        idxs.into_iter().map(|i| &self.entries[i as usize]).collect()
    }

    fn name_candidates(&self, word: &str) -> Vec<&NameEntry> {
        let mut idxs: Vec<u32> = self.names_by_kanji.get(word).into_iter().flatten().copied().collect();
        if idxs.is_empty() {
            idxs = self.names_by_kana.get(word).into_iter().flatten().copied().collect();
        }
        idxs.into_iter().map(|i| &self.names[i as usize]).collect()
    }

    /// Score a word entry per spec.md §4.5's additive table.
    fn score_word(word: &str, reading: Option<&str>, is_counter: bool, entry: &DictEntry, hiragana_input: bool) -> i32 {
        let mut score = 0;
        let norm_reading = reading.map(normalize_kana);

        for k in &entry.kanji {
            if k.text == word && k.common {
                score += 10;
            }
        }
        for k in &entry.kana {
            if k.common {
                score += 5;
            }
            if let Some(r) = reading {
                if k.text == r {
                    score += 20;
                    continue;
                }
            }
            if let Some(nr) = &norm_reading {
                if &normalize_kana(&k.text) == nr {
                    score += 18;
                }
            }
        }

        if hiragana_input {
            if let Some(first) = entry.senses.first() {
                if first.misc.iter().any(|m| m == "uk") {
                    score += 15;
                }
            }
        }

        if is_counter && entry.senses.iter().any(|s| s.is_counter()) {
            score += 50;
        }

        score
    }

    fn score_name(word: &str, entry: &NameEntry) -> i32 {
        let mut score = 0;
        for k in &entry.kanji {
            if k.text == word && k.common {
                score += 10;
            }
        }
        for k in &entry.kana {
            if k.common {
                score += 5;
            }
        }
        score
    }

    /// The core scored-selection policy shared by [`Dictionary::lookup`] and
    /// [`Dictionary::lookup_details`]. Grounded on `jmdict.py::_find_best_entry`.
    fn find_best(&self, word: &str, reading: Option<&str>, is_counter: bool, include_names: bool) -> Option<Candidate<'_>> {
        let words = self.word_candidates(word);
        if !words.is_empty() {
            let hiragana_input = is_all_hiragana(word);
            let mut best: Option<(&DictEntry, i32)> = None;
            for entry in &words {
                let score = Self::score_word(word, reading, is_counter, entry, hiragana_input);
                if best.map(|(_, s)| score > s).unwrap_or(true) {
                    best = Some((entry, score));
                }
            }
            return best.map(|(e, _)| Candidate::Word(e));
        }

        if include_names {
            let names = self.name_candidates(word);
            if !names.is_empty() {
                let mut best: Option<(&NameEntry, i32)> = None;
                for entry in &names {
                    let score = Self::score_name(word, entry);
                    if best.map(|(_, s)| score > s).unwrap_or(true) {
                        best = Some((entry, score));
                    }
                }
                return best.map(|(e, _)| Candidate::Name(e));
            }
        }

        None
    }

    /// Meaning-only lookup; names excluded. Grounded on `jmdict.py::lookup`.
    pub fn lookup(&self, word: &str, reading: Option<&str>, is_counter: bool) -> Option<String> {
        match self.find_best(word, reading, is_counter, false)? {
            Candidate::Word(entry) => {
                let target = if is_counter {
                    entry.senses.iter().find(|s| s.is_counter()).or_else(|| entry.senses.first())
                } else {
                    entry.senses.first()
                }?;
                let glosses: Vec<&str> = target.glosses.iter().take(3).map(String::as_str).collect();
                if glosses.is_empty() {
                    None
                } else {
                    Some(glosses.join("; "))
                }
            }
            Candidate::Name(_) => None,
        }
    }

    /// Meaning and tags, including the name-suffix fallback (spec.md §4.5,
    /// §8 "Name-suffix fallback"). Grounded on `jmdict.py::lookup_details`.
    pub fn lookup_details(&self, word: &str, reading: Option<&str>, is_counter: bool) -> Option<LookupDetails> {
        let best = self.find_best(word, reading, is_counter, true);

        let best = match best {
            Some(found) => Some(found),
            None => NAME_SUFFIXES.iter().find_map(|suffix| {
                let base = word.strip_suffix(suffix)?;
                if base.is_empty() {
                    return None;
                }
                match self.find_best(base, None, is_counter, true)? {
                    Candidate::Name(n) => Some(Candidate::Name(n)),
                    Candidate::Word(_) => None,
                }
            }),
        }?;

        match best {
            Candidate::Name(entry) => {
                if entry.translations.is_empty() {
                    return None;
                }
                let meaning = entry.translations.iter().take(3).cloned().collect::<Vec<_>>().join("; ");
                let mut tags = std::collections::BTreeSet::new();
                tags.insert("Name".to_string());
                for t in &entry.types {
                    let mut chars = t.chars();
                    let titled = match chars.next() {
                        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                        None => String::new(),
                    };
                    if !titled.is_empty() {
                        tags.insert(titled);
                    }
                }
                Some(LookupDetails { meaning, tags: tags.into_iter().collect() })
            }
            Candidate::Word(entry) => {
                let target_sense = if is_counter {
                    entry.senses.iter().find(|s| s.is_counter()).or_else(|| entry.senses.first())
                } else {
                    entry.senses.first()
                }?;
                let glosses: Vec<&str> = target_sense.glosses.iter().take(3).map(String::as_str).collect();
                let meaning = glosses.join("; ");
                let tags = tags_for_sense(target_sense);
                Some(LookupDetails { meaning, tags })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kanji: &[(&str, bool)], kana: &[(&str, bool)], glosses: &[&str]) -> DictEntry {
        DictEntry {
            kanji: kanji.iter().map(|(t, c)| Form { text: t.to_string(), common: *c }).collect(),
            kana: kana.iter().map(|(t, c)| Form { text: t.to_string(), common: *c }).collect(),
            senses: vec![Sense {
                part_of_speech: vec![],
                glosses: glosses.iter().map(|s| s.to_string()).collect(),
                misc: vec![],
                field: vec![],
            }],
        }
    }

    #[test]
    fn voicing_normalized_tie_break() {
        let mut dict = Dictionary::default();
        dict.entries.push(entry(&[], &[("は", true)], &["topic marker"]));
        dict.entries.push(entry(&[], &[("ば", true)], &["voiced variant"]));
        dict.by_kana.insert("葉".to_string(), vec![0, 1]);

        let best = dict.find_best("葉", Some("は"), false, false);
        match best.unwrap() {
            Candidate::Word(e) => assert_eq!(e.senses[0].glosses[0], "topic marker"),
            _ => panic!("expected word"),
        }
    }

    #[test]
    fn name_suffix_fallback() {
        let mut dict = Dictionary::default();
        dict.names.push(NameEntry {
            kanji: vec![Form { text: "田中".to_string(), common: true }],
            kana: vec![],
            translations: vec!["Tanaka".to_string()],
            types: vec!["surname".to_string()],
        });
        dict.names_by_kanji.insert("田中".to_string(), vec![0]);

        let details = dict.lookup_details("田中さん", None, false).unwrap();
        assert_eq!(details.meaning, "Tanaka");
        assert!(details.tags.contains(&"Surname".to_string()));
        assert!(details.tags.contains(&"Name".to_string()));
    }

    #[test]
    fn counter_sense_preferred() {
        let mut dict = Dictionary::default();
        dict.entries.push(DictEntry {
            kanji: vec![],
            kana: vec![Form { text: "ほん".to_string(), common: true }],
            senses: vec![
                Sense {
                    part_of_speech: vec![],
                    glosses: vec!["book".to_string()],
                    misc: vec![],
                    field: vec![],
                },
                Sense {
                    part_of_speech: vec!["ctr".to_string()],
                    glosses: vec!["counter for long objects".to_string()],
                    misc: vec![],
                    field: vec![],
                },
            ],
        });
        dict.by_kana.insert("ほん".to_string(), vec![0]);

        let meaning = dict.lookup("ほん", None, true).unwrap();
        assert_eq!(meaning, "counter for long objects");
    }
}
