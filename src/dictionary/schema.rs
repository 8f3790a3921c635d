//! Serde types for the jmdict-simplified JSON schema (both the `jmdict-eng`
//! word dictionary and the `jmnedict` name dictionary share this shape).
//!
//! Grounded on `original_source/services/jmdict.py`'s direct dict-key access
//! (`entry.get("kanji", [])`, `kana.get("text")`, `sense.get("partOfSpeech")`,
//! ...) — this module is the typed counterpart of that freeform JSON walking.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Dump {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub words: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub kanji: Vec<KanjiForm>,
    #[serde(default)]
    pub kana: Vec<KanaForm>,
    #[serde(default)]
    pub sense: Vec<Sense>,
    /// Name-only field: absent on ordinary `jmdict-eng` entries.
    #[serde(default)]
    pub translation: Vec<Translation>,
}

impl Entry {
    pub fn is_name(&self) -> bool {
        !self.translation.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct KanjiForm {
    pub text: String,
    #[serde(default)]
    pub common: bool,
}

#[derive(Debug, Deserialize)]
pub struct KanaForm {
    pub text: String,
    #[serde(default)]
    pub common: bool,
}

#[derive(Debug, Deserialize)]
pub struct Sense {
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: Vec<String>,
    #[serde(default)]
    pub gloss: Vec<Gloss>,
    #[serde(default)]
    pub misc: Vec<String>,
    #[serde(default)]
    pub field: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Gloss {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub translation: Vec<TranslationText>,
    #[serde(default, rename = "type")]
    pub kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslationText {
    pub text: String,
}
