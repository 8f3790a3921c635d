//! The English hint generator: composes a natural-language translation hint
//! from a dictionary gloss, an auxiliary chain, and a terminal conjugation
//! (spec.md §4.7).
//!
//! Grounded verbatim on `original_source/services/conjugation/helpers.py`'s
//! `generate_translation_hint`/`generate_adjective_hint`/`make_past_tense`/
//! `_make_regular_past`.

use crate::conjugate::adjective::AdjConjugation;
use crate::conjugate::{Auxiliary, Conjugation};

/// The real past-tense inflector is an external collaborator (spec.md §6);
/// this trait is the kernel-side boundary for it.
pub trait PastTenseInflector {
    fn past_tense(&self, verb: &str) -> String;
}

/// Deterministic -ed/-ied/-d fallback, used when no real inflector is
/// plugged in. Grounded on `helpers.py::_make_regular_past`.
#[derive(Debug, Default)]
pub struct RegularPastTenseInflector;

impl PastTenseInflector for RegularPastTenseInflector {
    fn past_tense(&self, verb: &str) -> String {
        if verb.ends_with('e') {
            format!("{verb}d")
        } else if verb.ends_with('y') && verb.len() > 1 {
            let mut chars = verb.chars();
            let last = chars.next_back().unwrap();
            let prev = chars.next_back().unwrap_or('a');
            let _ = last;
            if !"aeiou".contains(prev) {
                format!("{}ied", &verb[..verb.len() - 1])
            } else {
                format!("{verb}ed")
            }
        } else {
            format!("{verb}ed")
        }
    }
}

/// Strip a leading "to " and take everything up to the first "," or ";".
/// Grounded on `generate_translation_hint`'s opening lines.
fn first_clause(meaning: &str) -> String {
    let first = meaning.split(';').next().unwrap_or(meaning);
    let first = first.split(',').next().unwrap_or(first).trim();
    first.strip_prefix("to ").unwrap_or(first).to_string()
}

/// Build a natural-language hint for a verb's auxiliary chain + terminal
/// conjugation. `ichidan` disambiguates `ReruRareru`'s meaning (potential for
/// ichidan, passive-only for godan, per Open Question (1)).
///
/// Grounded on `helpers.py::generate_translation_hint`.
pub fn generate_verb_hint(
    meaning: &str,
    auxiliaries: &[Auxiliary],
    conjugation: Conjugation,
    ichidan: bool,
    inflector: &dyn PastTenseInflector,
) -> String {
    if meaning.is_empty() {
        return String::new();
    }

    let mut hint = first_clause(meaning);

    for &aux in auxiliaries {
        hint = match aux {
            Auxiliary::Potential => format!("can {hint}"),
            Auxiliary::ReruRareru => {
                if ichidan {
                    format!("can {hint}")
                } else {
                    format!("is {hint}")
                }
            }
            Auxiliary::Nai => format!("not {hint}"),
            Auxiliary::Tai => format!("want to {hint}"),
            Auxiliary::TeIru => format!("is {hint}ing"),
            Auxiliary::SeruSaseru | Auxiliary::ShortenedCausative => format!("make/let {hint}"),
            Auxiliary::Miru => format!("try to {hint}"),
            Auxiliary::Shimau => format!("end up {hint}ing"),
            Auxiliary::Nasai => format!("please {hint}"),
            Auxiliary::Masu => hint,
            _ => hint,
        };
    }

    hint = match conjugation {
        Conjugation::Negative | Conjugation::Zu | Conjugation::Nu => {
            if let Some(rest) = hint.strip_prefix("can ") {
                format!("cannot {rest}")
            } else {
                format!("not {hint}")
            }
        }
        Conjugation::Ta => {
            if hint.ends_with("ing") {
                hint
            } else if hint.contains("can ") && hint.contains("not") {
                let verb = hint.replace("not ", "").replace("can ", "");
                format!("couldn't {verb}")
            } else if hint.contains("not") {
                let verb = hint.replace("not ", "").replace("can ", "");
                format!("didn't {verb}")
            } else if let Some(rest) = hint.strip_prefix("can ") {
                format!("could {rest}")
            } else {
                inflector.past_tense(&hint)
            }
        }
        Conjugation::Te => format!("{hint} and..."),
        Conjugation::Conditional => format!("if {hint}"),
        Conjugation::Tara => {
            if hint.contains("not") {
                format!("if not {}", hint.replace("not ", ""))
            } else {
                format!("when/if {}", inflector.past_tense(&hint))
            }
        }
        Conjugation::Volitional => format!("let's {hint}"),
        Conjugation::Imperative => format!("{hint}!"),
        _ => hint,
    };

    hint
}

/// Build a natural-language hint for an adjective conjugation. Grounded on
/// `helpers.py::generate_adjective_hint`.
pub fn generate_adjective_hint(meaning: &str, conjugation: AdjConjugation) -> String {
    if meaning.is_empty() {
        return String::new();
    }

    let hint = first_clause(meaning);

    match conjugation {
        AdjConjugation::Present => format!("is {hint}"),
        AdjConjugation::Prenominal => hint,
        AdjConjugation::Negative => format!("is not {hint}"),
        AdjConjugation::Past => format!("was {hint}"),
        AdjConjugation::NegativePast => format!("was not {hint}"),
        AdjConjugation::ConjunctiveTe => format!("is {hint} and..."),
        AdjConjugation::Adverbial => format!("{hint}ly"),
        AdjConjugation::Conditional => format!("if {hint}"),
        AdjConjugation::TaraConditional => format!("if was {hint}"),
        AdjConjugation::Tari => format!("was {hint} and..."),
        AdjConjugation::Noun => format!("{hint}ness"),
        AdjConjugation::StemSou => format!("looks {hint}"),
        AdjConjugation::StemNegativeSou => format!("doesn't look {hint}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn couldnt_eat_when_potential_and_negative_and_past() {
        let hint = generate_verb_hint(
            "to eat",
            &[Auxiliary::ReruRareru, Auxiliary::Nai],
            Conjugation::Ta,
            true,
            &RegularPastTenseInflector,
        );
        assert_eq!(hint, "couldn't eat");
    }

    #[test]
    fn if_tries_being_told_contains_if_and_try() {
        let hint = generate_verb_hint(
            "to say",
            &[Auxiliary::ReruRareru, Auxiliary::Miru],
            Conjugation::Conditional,
            false,
            &RegularPastTenseInflector,
        );
        assert!(hint.contains("if"));
        assert!(hint.contains("try"));
    }

    #[test]
    fn please_eat_for_nasai() {
        let hint = generate_verb_hint("to eat", &[Auxiliary::Nasai], Conjugation::Dictionary, true, &RegularPastTenseInflector);
        assert_eq!(hint, "please eat");
    }

    /// A small irregular-verb lookup used only in tests, standing in for the
    /// real external inflector (lemminflect-equivalent) the spec's worked
    /// scenarios assume.
    struct TestInflector;

    impl PastTenseInflector for TestInflector {
        fn past_tense(&self, verb: &str) -> String {
            match verb {
                "go" => "went".to_string(),
                "eat" => "ate".to_string(),
                other => RegularPastTenseInflector.past_tense(other),
            }
        }
    }

    #[test]
    fn went_for_iku_plus_masu_plus_ta() {
        let hint = generate_verb_hint("to go", &[Auxiliary::Masu], Conjugation::Ta, false, &TestInflector);
        assert_eq!(hint, "went");
    }

    #[test]
    fn regular_past_tense_y_rule() {
        let inflector = RegularPastTenseInflector;
        assert_eq!(inflector.past_tense("try"), "tried");
        assert_eq!(inflector.past_tense("play"), "played");
        assert_eq!(inflector.past_tense("like"), "liked");
        assert_eq!(inflector.past_tense("want"), "wanted");
    }
}
