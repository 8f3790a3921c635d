//! The bidirectional conjugation engine: forward generation and deconjugation
//! for verbs and adjectives, and the auxiliary chain model that sits between
//! them.

pub mod adjective;
pub mod auxiliary;
pub mod deconjugate;
pub mod verb;

pub use adjective::{AdjectiveClass, AdjConjugation};
pub use auxiliary::Auxiliary;
pub use deconjugate::{deconjugate, Deconjugated};

/// Which conjugation family a predicate belongs to. Classification is
/// normally derived from the segmenter's inflection tags; the kana-row
/// heuristic in [`crate::kana::looks_ichidan`] is only a fallback for a bare
/// lemma with no such tagging (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateClass {
    GodanType1,
    IchidanType2,
    IrregularSuru,
    IrregularKuru { kanji_prefix: bool },
    CopulaDa,
    CopulaDesu,
}

/// The closed set of terminal conjugation forms a verb, adjective, or chain
/// can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjugation {
    Negative,
    Conjunctive,
    Dictionary,
    Conditional,
    Imperative,
    Volitional,
    Te,
    Ta,
    Tara,
    Tari,
    Zu,
    Nu,
}

impl Conjugation {
    /// A short, display-friendly name for this terminal conjugation, used in
    /// [`crate::pipeline::token::ConjugationInfo`] summaries.
    pub fn short_name(self) -> &'static str {
        match self {
            Conjugation::Negative => "negative",
            Conjugation::Conjunctive => "conjunctive (stem)",
            Conjugation::Dictionary => "dictionary form",
            Conjugation::Conditional => "conditional",
            Conjugation::Imperative => "imperative",
            Conjugation::Volitional => "volitional",
            Conjugation::Te => "te-form",
            Conjugation::Ta => "past",
            Conjugation::Tara => "conditional (tara)",
            Conjugation::Tari => "representative (tari)",
            Conjugation::Zu => "negative (zu)",
            Conjugation::Nu => "negative (nu)",
        }
    }

    pub const ALL: &'static [Conjugation] = &[
        Conjugation::Negative,
        Conjugation::Conjunctive,
        Conjugation::Dictionary,
        Conjugation::Conditional,
        Conjugation::Imperative,
        Conjugation::Volitional,
        Conjugation::Te,
        Conjugation::Ta,
        Conjugation::Tara,
        Conjugation::Tari,
        Conjugation::Zu,
        Conjugation::Nu,
    ];
}
