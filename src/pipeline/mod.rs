//! The analytic pipeline: segmenter output in, learner-facing [`token::Token`]s
//! out (spec.md §4.6).
//!
//! Grounded on spec.md §4.6's pseudocode and
//! `original_source/services/analyzer.py`'s `analyze`/`flush_buffer` loop
//! (dictionary-form dedup, group buffering) plus
//! `conjugation/helpers.py::try_deconjugate_verb`/`try_deconjugate_adjective`
//! for the per-token deconjugation/hint-building step.

pub mod hint;
pub mod token;
pub mod views;

use std::collections::HashSet;

use crate::conjugate::adjective::{self, AdjectiveClass};
use crate::conjugate::deconjugate;
use crate::conjugate::Conjugation;
use crate::grouper;
use crate::kana;
use crate::morpheme::{Morpheme, PartOfSpeech};
use crate::services::Services;

use self::hint::PastTenseInflector;
use self::token::{ConjugationInfo, Layer, LayerKind, Token};

pub use self::views::ViewKind;

/// Particle/auxiliary/pronoun glosses used when the dictionary index has no
/// entry under a function word's bound form. Grounded on
/// `original_source/services/analyzer.py::GRAMMAR_MAP`.
fn grammar_map(word: &str) -> Option<&'static str> {
    Some(match word {
        "は" => "topic marker",
        "が" => "subject marker",
        "を" => "object marker",
        "に" => "direction/time/target",
        "で" => "location/means",
        "の" => "possessive/of",
        "と" => "and/with/quote",
        "も" => "also/too",
        "から" => "from/because",
        "まで" => "until/to",
        "へ" => "toward",
        "より" => "than/from",
        "か" => "question/or",
        "ね" => "isn't it?",
        "よ" => "emphasis",
        "な" => "don't!/attributive",
        "わ" => "feminine emphasis",
        "ぞ" => "strong emphasis",
        "さ" => "filler/emphasis",
        "て" => "connection/request",
        "けど" => "but/although",
        "けれど" => "but/although",
        "のに" => "despite/although",
        "ので" => "because/so",
        "たり" => "doing things like",
        "ながら" => "while doing",
        "ばかり" => "only/just",
        "だけ" => "only/just",
        "しか" => "only (with neg)",
        "ほど" => "extent/degree",
        "くらい" => "about/approximately",
        "など" => "etc./and so on",
        "こそ" => "emphasis (this very)",
        "さえ" => "even",
        "でも" => "but/even",
        "なら" => "if/as for",
        "たら" => "if/when",
        "ば" => "if/when",
        "って" => "quotation (casual)",
        "ます" => "polite form",
        "です" => "copula (polite)",
        "だ" => "copula (plain)",
        "た" => "past tense",
        "ない" => "negation",
        "ぬ" => "negation (archaic)",
        "れる" => "passive/potential",
        "られる" => "passive/potential",
        "せる" => "causative",
        "させる" => "causative",
        "たい" => "want to",
        "たがる" => "seems to want",
        "そう" => "seems like",
        "よう" => "manner/let's",
        "らしい" => "seems/apparently",
        "べき" => "should",
        "はず" => "expected to",
        "私" => "I/me",
        "僕" => "I (male)",
        "俺" => "I (rough male)",
        "あなた" => "you",
        "君" => "you (familiar)",
        "彼" => "he/him",
        "彼女" => "she/her",
        "これ" => "this",
        "それ" => "that",
        "あれ" => "that (over there)",
        "ここ" => "here",
        "そこ" => "there",
        "あそこ" => "over there",
        "誰" => "who",
        "何" => "what",
        "どこ" => "where",
        "いつ" => "when",
        "どう" => "how",
        "なぜ" => "why",
        "どれ" => "which",
        _ => return None,
    })
}

/// Build the simplified sub-morpheme records for a grouped or phrase-matched
/// span (spec.md §3's `components: optional list of sub-morphemes`,
/// spec.md §4.4: the grouper "simply defines the surface, reading
/// (concatenation), and the list of component records"). `None` for a
/// singleton span — there's nothing to decompose.
fn component_tokens<M: Morpheme>(span: &[M]) -> Option<Vec<Token>> {
    if span.len() < 2 {
        return None;
    }
    Some(
        span.iter()
            .map(|m| {
                Token::simple(
                    m.surface().to_string(),
                    m.dictionary_form().to_string(),
                    m.reading().to_string(),
                    m.part_of_speech().label().to_string(),
                )
            })
            .collect(),
    )
}

/// Build a verb's [`ConjugationInfo`] from the first deconjugation hit (the
/// lowest-depth, stable-order result; spec.md §4.1's "Callers typically take
/// the first").
fn verb_conjugation(
    dictionary_form: &str,
    surface: &str,
    meaning: Option<&str>,
    inflector: &dyn PastTenseInflector,
) -> Option<ConjugationInfo> {
    let ichidan = kana::looks_ichidan(dictionary_form);
    let hit = deconjugate::deconjugate(surface, dictionary_form, ichidan, 3).into_iter().next()?;

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
            polite: is_copula.then(|| token::is_polite_copula_surface(surface)),
        });
    }

    let summary = if chain.is_empty() {
        "dictionary form".to_string()
    } else {
        chain.iter().map(|l| l.short.as_str()).collect::<Vec<_>>().join(" + ")
    };

    let translation_hint = meaning
        .map(|m| hint::generate_verb_hint(m, &hit.auxiliaries, hit.conjugation, ichidan, inflector))
        .unwrap_or_default();

    Some(ConjugationInfo { chain, summary, translation_hint })
}

/// Build an adjective's [`ConjugationInfo`] from the first deconjugation hit.
fn adjective_conjugation(dictionary_form: &str, surface: &str, class: AdjectiveClass, meaning: Option<&str>) -> Option<ConjugationInfo> {
    let hit = adjective::deconjugate(surface, dictionary_form, class).into_iter().next()?;
    let short = format!("{:?}", hit.conjugation);
    let polite = (class == AdjectiveClass::Na).then(|| token::is_polite_copula_surface(surface));
    let layer = Layer { kind: LayerKind::Conj, short: short.clone(), gloss: short.clone(), polite };
    let translation_hint = meaning.map(|m| hint::generate_adjective_hint(m, hit.conjugation)).unwrap_or_default();
    Some(ConjugationInfo { chain: vec![layer], summary: short, translation_hint })
}

/// Vocabulary-view filters: content-word POS only, bare する, and single-kana
/// grammaticalized verbs are dropped (spec.md §4.6).
fn vocabulary_excludes<M: Morpheme>(head: &M, head_pos: PartOfSpeech, dictionary_form: &str) -> bool {
    if !matches!(
        head_pos,
        PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adjective | PartOfSpeech::NaAdjective | PartOfSpeech::Adverb | PartOfSpeech::Pronoun
    ) {
        return true;
    }
    if dictionary_form == "する" {
        return true;
    }
    if head_pos == PartOfSpeech::Verb
        && dictionary_form.chars().count() == 1
        && dictionary_form.chars().next().is_some_and(kana::is_hiragana)
    {
        return true;
    }
    let _ = head;
    false
}

/// Run the shared iteration pattern of spec.md §4.6 over a morpheme
/// sequence, producing one [`Token`] per phrase match or grouped span.
///
/// `view` selects vocabulary or full filtering; deep single-word analysis
/// has its own entry point ([`views::deep_analyze`]) since it isn't an
/// iteration over a sentence.
pub fn analyze<M: Morpheme>(services: &Services, morphemes: &[M], view: ViewKind, inflector: &dyn PastTenseInflector) -> Vec<Token> {
    let full_view = view == ViewKind::Full;
    let mut tokens = Vec::new();
    let mut seen = HashSet::new();
    let mut i = 0;

    while i < morphemes.len() {
        if let Some((phrase, meaning, consumed)) = services.phrases.try_match(morphemes, i) {
            let span = &morphemes[i..i + consumed];
            let surface: String = span.iter().map(|m| m.surface()).collect();
            let reading: String = span.iter().map(|m| m.reading()).collect();
            let layer = Layer { kind: LayerKind::Phrase, short: phrase.clone(), gloss: meaning.clone(), polite: None };
            let info = ConjugationInfo { chain: vec![layer], summary: phrase.clone(), translation_hint: meaning.clone() };
            tokens.push(Token {
                surface,
                base: phrase,
                reading,
                pos: "Phrase".to_string(),
                meaning: Some(meaning),
                tags: Vec::new(),
                components: component_tokens(span),
                conjugation: Some(info),
            });
            i += consumed;
            continue;
        }

        let head = &morphemes[i];
        let head_pos = head.part_of_speech();
        if head_pos.is_skipped() {
            i += 1;
            continue;
        }

        let mut dictionary_form = head.dictionary_form().to_string();

        if view == ViewKind::Vocabulary && vocabulary_excludes(head, head_pos, &dictionary_form) {
            i += 1;
            continue;
        }

        let j = grouper::group(morphemes, i, full_view);
        let span = &morphemes[i..j];
        let compound_surface: String = span.iter().map(|m| m.surface()).collect();
        let compound_reading: String = span.iter().map(|m| m.reading()).collect();

        let is_predicate = matches!(head_pos, PartOfSpeech::Verb | PartOfSpeech::Adjective | PartOfSpeech::NaAdjective);

        if is_predicate && head_pos == PartOfSpeech::Verb && dictionary_form.ends_with("れる") {
            if let Some(shorter) = deconjugate::ranuki_normalize(&dictionary_form, |w| services.dictionary.lookup_details(w, None, false).is_some()) {
                dictionary_form = shorter;
            }
        }

        let details = services.dictionary.lookup_details(&dictionary_form, Some(head.reading()), false);
        let meaning = details
            .as_ref()
            .map(|d| d.meaning.clone())
            .or_else(|| grammar_map(&dictionary_form).map(str::to_string))
            .or_else(|| grammar_map(head.surface()).map(str::to_string));
        let tags = details.map(|d| d.tags).unwrap_or_default();

        let conjugation = if compound_surface != dictionary_form {
            match head_pos {
                PartOfSpeech::Verb => verb_conjugation(&dictionary_form, &compound_surface, meaning.as_deref(), inflector),
                PartOfSpeech::Adjective => adjective_conjugation(&dictionary_form, &compound_surface, AdjectiveClass::I, meaning.as_deref()),
                // A noun only absorbs a trailing copula/auxiliary span in full
                // view when the grouper treats it as a na-adjective head
                // (spec.md §4.4's "if head is a noun (full-view only): as
                // na-adjective"), so the same copula-conjugation table applies.
                PartOfSpeech::NaAdjective | PartOfSpeech::Noun if is_predicate || full_view => {
                    adjective_conjugation(&dictionary_form, &compound_surface, AdjectiveClass::Na, meaning.as_deref())
                }
                _ => None,
            }
        } else {
            None
        };

        if !seen.insert(dictionary_form.clone()) {
            i = j;
            continue;
        }

        if view == ViewKind::Vocabulary && meaning.is_none() && kana::is_mostly_katakana(&compound_surface) {
            i = j;
            continue;
        }

        tokens.push(Token {
            surface: compound_surface,
            base: dictionary_form,
            reading: compound_reading,
            pos: head_pos.label().to_string(),
            meaning,
            tags,
            components: component_tokens(span),
            conjugation,
        });
        i = j;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::schema::Dump;
    use crate::dictionary::Dictionary;
    use crate::morpheme::{OwnedMorpheme, PosTags};
    use crate::phrase::PhraseCatalogue;
    use crate::pipeline::hint::RegularPastTenseInflector;

    fn services_with(words_json: &str) -> Services {
        let dump: Dump = serde_json::from_str(words_json).unwrap();
        Services { dictionary: Dictionary::from_word_dump(dump), phrases: PhraseCatalogue::build() }
    }

    fn m(surface: &str, dict: &str, reading: &str, main: &str, sub1: &str) -> OwnedMorpheme {
        OwnedMorpheme {
            surface: surface.to_string(),
            dictionary_form: dict.to_string(),
            reading: reading.to_string(),
            pos: PosTags::new([main, sub1]),
        }
    }

    #[test]
    fn taberarenakatta_single_token_with_hint() {
        let services = services_with(
            r#"{"words":[{"id":"1","kanji":[{"text":"食べる","common":true}],"kana":[{"text":"たべる","common":true}],"sense":[{"gloss":[{"text":"to eat"}]}]}]}"#,
        );
        let morphemes = vec![
            m("食べ", "食べる", "タベ", "動詞", "一般"),
            m("られ", "られる", "ラレ", "助動詞", ""),
            m("なかっ", "ない", "ナカッ", "助動詞", ""),
            m("た", "た", "タ", "助動詞", ""),
        ];
        let tokens = analyze(&services, &morphemes, ViewKind::Full, &RegularPastTenseInflector);
        assert_eq!(tokens.len(), 1);
        let t = &tokens[0];
        assert_eq!(t.base, "食べる");
        assert_eq!(t.surface, "食べられなかった");
        let info = t.conjugation.as_ref().unwrap();
        assert_eq!(info.translation_hint, "couldn't eat");

        let components = t.components.as_ref().unwrap();
        assert_eq!(components.len(), 4);
        assert_eq!(components[0].surface, "食べ");
        assert_eq!(components[3].surface, "た");
    }

    #[test]
    fn singleton_span_has_no_components() {
        let services = services_with(
            r#"{"words":[{"id":"1","kanji":[{"text":"猫","common":true}],"kana":[{"text":"ねこ","common":true}],"sense":[{"gloss":[{"text":"cat"}]}]}]}"#,
        );
        let morphemes = vec![m("猫", "猫", "ネコ", "名詞", "普通名詞")];
        let tokens = analyze(&services, &morphemes, ViewKind::Full, &RegularPastTenseInflector);
        assert!(tokens[0].components.is_none());
    }

    #[test]
    fn dedup_within_request() {
        let services = services_with(
            r#"{"words":[{"id":"1","kanji":[{"text":"猫","common":true}],"kana":[{"text":"ねこ","common":true}],"sense":[{"gloss":[{"text":"cat"}]}]}]}"#,
        );
        let morphemes = vec![
            m("猫", "猫", "ネコ", "名詞", "普通名詞"),
            m("猫", "猫", "ネコ", "名詞", "普通名詞"),
        ];
        let tokens = analyze(&services, &morphemes, ViewKind::Full, &RegularPastTenseInflector);
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn noun_copula_past_tags_plain_vs_polite() {
        let services = services_with(
            r#"{"words":[{"id":"1","kanji":[{"text":"猫","common":true}],"kana":[{"text":"ねこ","common":true}],"sense":[{"gloss":[{"text":"cat"}]}]}]}"#,
        );

        let plain = vec![
            m("猫", "猫", "ネコ", "名詞", "普通名詞"),
            m("だっ", "だ", "ダッ", "助動詞", ""),
            m("た", "た", "タ", "助動詞", ""),
        ];
        let tokens = analyze(&services, &plain, ViewKind::Full, &RegularPastTenseInflector);
        assert_eq!(tokens[0].surface, "猫だった");
        let layer = tokens[0].conjugation.as_ref().unwrap().chain.last().unwrap();
        assert_eq!(layer.polite, Some(false));

        let polite = vec![
            m("猫", "猫", "ネコ", "名詞", "普通名詞"),
            m("でし", "です", "デシ", "助動詞", ""),
            m("た", "た", "タ", "助動詞", ""),
        ];
        let tokens = analyze(&services, &polite, ViewKind::Full, &RegularPastTenseInflector);
        assert_eq!(tokens[0].surface, "猫でした");
        let layer = tokens[0].conjugation.as_ref().unwrap().chain.last().unwrap();
        assert_eq!(layer.polite, Some(true));
    }

    #[test]
    fn vocabulary_view_drops_bare_suru() {
        let services = services_with(r#"{"words":[]}"#);
        let morphemes = vec![m("し", "する", "シ", "動詞", "非自立可能"), m("た", "た", "タ", "助動詞", "")];
        let tokens = analyze(&services, &morphemes, ViewKind::Vocabulary, &RegularPastTenseInflector);
        assert!(tokens.is_empty());
    }
}
