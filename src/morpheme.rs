//! The segmenter boundary: the morpheme record the kernel consumes, lifted
//! part-of-speech tags, and the segmenter trait itself.
//!
//! The real segmenter is an external collaborator (spec.md §1); this module
//! only defines the interface and a small fixture-driven implementation used
//! by the integration tests.

use std::collections::HashMap;

/// Coarse part-of-speech categories the kernel distinguishes, lifted from the
/// segmenter's raw string tags at the boundary so the hot path never compares
/// strings (spec.md §9, "Dynamic dispatch on POS strings → tagged variants").
///
/// Grounded on `original_source/services/analyzer.py::POS_MAPPING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    NaAdjective,
    Adverb,
    Determiner,
    Conjunction,
    Interjection,
    Auxiliary,
    Particle,
    Prefix,
    Suffix,
    Pronoun,
    Symbol,
    Punctuation,
    Whitespace,
    Other,
}

impl PartOfSpeech {
    /// Map a segmenter main-category tag to a coarse part of speech.
    pub fn from_tag(tag: &str) -> PartOfSpeech {
        match tag {
            "名詞" => PartOfSpeech::Noun,
            "動詞" => PartOfSpeech::Verb,
            "形容詞" => PartOfSpeech::Adjective,
            "形状詞" => PartOfSpeech::NaAdjective,
            "副詞" => PartOfSpeech::Adverb,
            "連体詞" => PartOfSpeech::Determiner,
            "接続詞" => PartOfSpeech::Conjunction,
            "感動詞" => PartOfSpeech::Interjection,
            "助動詞" => PartOfSpeech::Auxiliary,
            "助詞" => PartOfSpeech::Particle,
            "接頭辞" => PartOfSpeech::Prefix,
            "接尾辞" => PartOfSpeech::Suffix,
            "代名詞" => PartOfSpeech::Pronoun,
            "記号" => PartOfSpeech::Symbol,
            "補助記号" => PartOfSpeech::Punctuation,
            "空白" => PartOfSpeech::Whitespace,
            _ => PartOfSpeech::Other,
        }
    }

    /// English label used when no dictionary or grammar-map meaning covers a
    /// morpheme and the token's `pos` field still needs a friendly string.
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::NaAdjective => "Na-Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Determiner => "Determiner",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Interjection => "Interjection",
            PartOfSpeech::Auxiliary => "Auxiliary",
            PartOfSpeech::Particle => "Particle",
            PartOfSpeech::Prefix => "Prefix",
            PartOfSpeech::Suffix => "Suffix",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Symbol | PartOfSpeech::Punctuation | PartOfSpeech::Whitespace => "Symbol",
            PartOfSpeech::Other => "Other",
        }
    }

    /// Part-of-speech tags the skip-set of spec.md §4.6 drops outright.
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Punctuation | PartOfSpeech::Symbol | PartOfSpeech::Whitespace
        )
    }
}

/// The ordered, coarse-to-fine raw tag tuple a segmenter attaches to a
/// morpheme (spec.md §3: "main category, sub-category, and deeper tags
/// including inflection class for predicates"). Index 0 is the main category,
/// index 1 the first sub-category (e.g. 非自立可能), deeper indices carry
/// conjugation-class tags such as 一段/五段.
#[derive(Debug, Clone, Default)]
pub struct PosTags(pub Vec<String>);

impl PosTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PosTags(tags.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn main(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    pub fn sub1(&self) -> &str {
        self.get(1).unwrap_or("")
    }

    /// True when any deeper tag contains a ichidan conjugation-class marker
    /// (一段, 上一段, 下一段) — grounded on
    /// `original_source/services/conjugation/helpers.py::is_verb_type2`.
    pub fn is_ichidan(&self) -> bool {
        self.0
            .iter()
            .any(|t| t.contains('一') && t.contains('段') && !t.contains('五'))
    }

    pub fn is_godan(&self) -> bool {
        self.0.iter().any(|t| t.contains('五') && t.contains('段'))
    }

    /// Is this the "non-independent possible" predicate sub-tag (ている,
    /// ておく, てほしい-style bound auxiliary verbs)?
    pub fn is_non_independent(&self) -> bool {
        self.sub1() == "非自立可能"
    }

    pub fn is_connective_particle(&self) -> bool {
        self.sub1() == "接続助詞"
    }
}

/// A single morpheme as produced by the segmenter. The kernel only reads
/// these four fields plus the POS tuple; it never mutates a morpheme.
pub trait Morpheme {
    fn surface(&self) -> &str;
    fn dictionary_form(&self) -> &str;
    fn reading(&self) -> &str;
    fn pos(&self) -> &PosTags;

    fn is_oov(&self) -> bool {
        false
    }

    fn part_of_speech(&self) -> PartOfSpeech {
        PartOfSpeech::from_tag(self.pos().main())
    }
}

/// Segmentation granularity. The kernel uses `Long` for sentence analysis (to
/// preserve compound nouns) and `Short` for deep single-word analysis
/// (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    Short,
    Mid,
    Long,
}

/// The segmenter interface the kernel depends on. A real implementation
/// wraps a third-party morphological analyzer; this crate ships none.
pub trait Segmenter {
    type Morpheme: Morpheme;

    fn tokenize(&self, text: &str, split_mode: SplitMode) -> Vec<Self::Morpheme>;
}

/// A plain, owned morpheme record, used by [`TestSegmenter`] and by any
/// adapter wrapping a concrete segmenter.
#[derive(Debug, Clone)]
pub struct OwnedMorpheme {
    pub surface: String,
    pub dictionary_form: String,
    pub reading: String,
    pub pos: PosTags,
}

impl Morpheme for OwnedMorpheme {
    fn surface(&self) -> &str {
        &self.surface
    }

    fn dictionary_form(&self) -> &str {
        &self.dictionary_form
    }

    fn reading(&self) -> &str {
        &self.reading
    }

    fn pos(&self) -> &PosTags {
        &self.pos
    }
}

/// A fixture-driven segmenter used by tests: a fixed lookup table from
/// surface text to a pre-built [`OwnedMorpheme`] sequence. Not a real
/// morphological analyzer — just enough to exercise the pipeline's own
/// logic without depending on one.
#[derive(Debug, Default)]
pub struct TestSegmenter {
    fixtures: HashMap<String, Vec<OwnedMorpheme>>,
}

impl TestSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, text: &str, morphemes: Vec<OwnedMorpheme>) -> &mut Self {
        self.fixtures.insert(text.to_string(), morphemes);
        self
    }
}

impl Segmenter for TestSegmenter {
    type Morpheme = OwnedMorpheme;

    fn tokenize(&self, text: &str, _split_mode: SplitMode) -> Vec<OwnedMorpheme> {
        self.fixtures.get(text).cloned().unwrap_or_default()
    }
}
