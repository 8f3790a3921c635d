//! Response shaping: the three analytic views (vocabulary, full, deep) plus
//! the thin forward-conjugation view (spec.md §4.6, §6).

use crate::conjugate::adjective::{self, AdjectiveClass};
use crate::conjugate::auxiliary::Auxiliary;
use crate::conjugate::deconjugate::{self, Deconjugated};
use crate::conjugate::verb;
use crate::conjugate::Conjugation;
use crate::error::{KernelError, Result};
use crate::services::Services;

use super::hint::PastTenseInflector;
use super::token::{ConjugationInfo, Layer, LayerKind, Token};

/// Which of the two sentence-level views to run (spec.md §4.6). Deep and
/// forward analysis are single-word operations with their own entry points
/// below, not instances of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Vocabulary,
    Full,
}

/// Deep single-word analysis: try every depth-3 deconjugation under both the
/// ichidan and godan hypothesis and report the first chain that matches
/// (spec.md §4.6, "deep view ... selects first-matching chain").
///
/// Unlike the sentence views this takes one surface word and one candidate
/// dictionary form rather than a morpheme sequence — the caller is expected
/// to have already segmented with [`crate::morpheme::SplitMode::Short`] and
/// picked the single content morpheme out of the result.
pub fn deep_analyze(services: &Services, surface: &str, dictionary_form: &str, inflector: &dyn PastTenseInflector) -> Option<Token> {
    if let Some(class) = adjective::identify_class(dictionary_form) {
        if let Some(hit) = adjective::deconjugate(surface, dictionary_form, class).into_iter().next() {
            let details = services.dictionary.lookup_details(dictionary_form, None, false);
            let meaning = details.as_ref().map(|d| d.meaning.clone());
            let tags = details.map(|d| d.tags).unwrap_or_default();
            let short = format!("{:?}", hit.conjugation);
            let polite = (class == AdjectiveClass::Na).then(|| super::token::is_polite_copula_surface(surface));
            let layer = Layer { kind: LayerKind::Conj, short: short.clone(), gloss: short.clone(), polite };
            let translation_hint = meaning.as_deref().map(|m| super::hint::generate_adjective_hint(m, hit.conjugation)).unwrap_or_default();
            return Some(Token {
                surface: surface.to_string(),
                base: dictionary_form.to_string(),
                reading: String::new(),
                pos: if class == AdjectiveClass::Na { "Na-Adjective" } else { "Adjective" }.to_string(),
                meaning,
                tags,
                // No morpheme span at this entry point (see doc comment above).
                components: None,
                conjugation: Some(ConjugationInfo { chain: vec![layer], summary: short, translation_hint }),
            });
        }
    }

    let hit = [true, false].into_iter().find_map(|ichidan| {
        deconjugate::deconjugate(surface, dictionary_form, ichidan, 3)
            .into_iter()
            .next()
            .map(|d| (ichidan, d))
    });

    let (ichidan, hit): (bool, Deconjugated) = hit?;
    let details = services.dictionary.lookup_details(dictionary_form, None, false);
    let meaning = details.as_ref().map(|d| d.meaning.clone());
    let tags = details.map(|d| d.tags).unwrap_or_default();

    let mut chain: Vec<Layer> = hit
        .auxiliaries
        .iter()
        .map(|&aux| Layer { kind: LayerKind::Aux, short: aux.short_name().to_string(), gloss: aux.short_name().to_string(), polite: None })
        .collect();
    if hit.conjugation != Conjugation::Dictionary {
        let is_copula = dictionary_form == "だ" || dictionary_form == "です";
        chain.push(Layer {
            kind: LayerKind::Conj,
            short: hit.conjugation.short_name().to_string(),
            gloss: hit.conjugation.short_name().to_string(),
            polite: is_copula.then(|| super::token::is_polite_copula_surface(surface)),
        });
    }
    let summary = if chain.is_empty() {
        "dictionary form".to_string()
    } else {
        chain.iter().map(|l| l.short.as_str()).collect::<Vec<_>>().join(" + ")
    };
    let translation_hint = meaning
        .as_deref()
        .map(|m| super::hint::generate_verb_hint(m, &hit.auxiliaries, hit.conjugation, ichidan, inflector))
        .unwrap_or_default();

    Some(Token {
        surface: surface.to_string(),
        base: dictionary_form.to_string(),
        reading: String::new(),
        pos: "Verb".to_string(),
        meaning,
        tags,
        components: None,
        conjugation: Some(ConjugationInfo { chain, summary, translation_hint }),
    })
}

/// Forward conjugation: a thin wrapper over the conjugation engine with no
/// dictionary lookup involved (spec.md §4.6's "forward view").
pub fn forward_conjugate(dictionary_form: &str, auxiliaries: &[Auxiliary], conjugation: Conjugation, ichidan: bool) -> Result<Vec<String>> {
    if auxiliaries.is_empty() {
        let class = if ichidan {
            crate::conjugate::PredicateClass::IchidanType2
        } else {
            crate::conjugate::PredicateClass::GodanType1
        };
        return verb::conjugate(dictionary_form, conjugation, ichidan)
            .ok_or(KernelError::UnknownConjugation { class, conjugation });
    }
    crate::conjugate::auxiliary::conjugate_chain(dictionary_form, auxiliaries, conjugation, ichidan)
}

/// Forward conjugation for an adjective, mirroring [`forward_conjugate`] for
/// the auxiliary-free adjective tables.
pub fn forward_conjugate_adjective(dictionary_form: &str, conjugation: adjective::AdjConjugation, class: AdjectiveClass) -> Vec<String> {
    adjective::conjugate(dictionary_form, conjugation, class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::schema::Dump;
    use crate::dictionary::Dictionary;
    use crate::phrase::PhraseCatalogue;
    use crate::pipeline::hint::RegularPastTenseInflector;

    fn services_with(words_json: &str) -> Services {
        let dump: Dump = serde_json::from_str(words_json).unwrap();
        Services { dictionary: Dictionary::from_word_dump(dump), phrases: PhraseCatalogue::build() }
    }

    #[test]
    fn deep_view_finds_potential_on_godan() {
        let services = services_with(
            r#"{"words":[{"id":"1","kanji":[{"text":"書く","common":true}],"kana":[{"text":"かく","common":true}],"sense":[{"gloss":[{"text":"to write"}]}]}]}"#,
        );
        let token = deep_analyze(&services, "書ける", "書く", &RegularPastTenseInflector).unwrap();
        assert_eq!(token.base, "書く");
        assert!(token.conjugation.unwrap().chain.iter().any(|l| l.short == "potential"));
    }

    #[test]
    fn deep_view_handles_i_adjective() {
        let services = services_with(r#"{"words":[]}"#);
        let token = deep_analyze(&services, "高くなかった", "高い", &RegularPastTenseInflector).unwrap();
        assert_eq!(token.pos, "Adjective");
    }

    #[test]
    fn deep_view_tags_da_plain_and_desu_polite() {
        let services = services_with(r#"{"words":[]}"#);

        let token = deep_analyze(&services, "だった", "だ", &RegularPastTenseInflector).unwrap();
        let mut info = token.conjugation.unwrap();
        let layer = info.chain.pop().unwrap();
        assert_eq!(layer.polite, Some(false));

        let token = deep_analyze(&services, "でした", "です", &RegularPastTenseInflector).unwrap();
        let mut info = token.conjugation.unwrap();
        let layer = info.chain.pop().unwrap();
        assert_eq!(layer.polite, Some(true));
    }

    #[test]
    fn forward_conjugate_wraps_verb_engine() {
        let result = forward_conjugate("食べる", &[], Conjugation::Negative, true).unwrap();
        assert_eq!(result, vec!["食べない".to_string()]);
    }

    #[test]
    fn forward_conjugate_with_chain() {
        let result = forward_conjugate("食べる", &[Auxiliary::ReruRareru, Auxiliary::Nai], Conjugation::Ta, true).unwrap();
        assert!(result.contains(&"食べられなかった".to_string()));
    }
}
