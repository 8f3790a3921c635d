//! Conjugation and deconjugation for i-adjectives (形容詞) and na-adjectives
//! (形容動詞). Unlike verbs, adjectives take no auxiliary chain — every
//! surface form is produced directly from the dictionary form.
//!
//! Grounded on `original_source/services/adjective.py`.

/// Which inflection table an adjective follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjectiveClass {
    I,
    Na,
}

/// The closed set of adjective conjugation forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjConjugation {
    Present,
    Prenominal,
    Negative,
    Past,
    NegativePast,
    ConjunctiveTe,
    Adverbial,
    Conditional,
    TaraConditional,
    Tari,
    Noun,
    StemSou,
    StemNegativeSou,
}

impl AdjConjugation {
    pub const ALL: &'static [AdjConjugation] = &[
        AdjConjugation::Present,
        AdjConjugation::Prenominal,
        AdjConjugation::Negative,
        AdjConjugation::Past,
        AdjConjugation::NegativePast,
        AdjConjugation::ConjunctiveTe,
        AdjConjugation::Adverbial,
        AdjConjugation::Conditional,
        AdjConjugation::TaraConditional,
        AdjConjugation::Tari,
        AdjConjugation::Noun,
        AdjConjugation::StemSou,
        AdjConjugation::StemNegativeSou,
    ];
}

fn conjugate_i(stem: &str, conj: AdjConjugation, add_sa: bool) -> Vec<String> {
    match conj {
        AdjConjugation::Present | AdjConjugation::Prenominal => vec![format!("{stem}い")],
        AdjConjugation::Negative => vec![format!("{stem}くない")],
        AdjConjugation::Past => vec![format!("{stem}かった")],
        AdjConjugation::NegativePast => vec![format!("{stem}くなかった")],
        AdjConjugation::ConjunctiveTe => vec![format!("{stem}く"), format!("{stem}くて")],
        AdjConjugation::Adverbial => vec![format!("{stem}く")],
        AdjConjugation::Conditional => vec![format!("{stem}ければ")],
        AdjConjugation::TaraConditional => vec![format!("{stem}かったら")],
        AdjConjugation::Tari => vec![format!("{stem}かったり")],
        AdjConjugation::Noun => vec![format!("{stem}さ")],
        AdjConjugation::StemSou => {
            if add_sa {
                vec![format!("{stem}さそう")]
            } else {
                vec![format!("{stem}そう")]
            }
        }
        AdjConjugation::StemNegativeSou => vec![format!("{stem}くなさそう")],
    }
}

fn conjugate_na(base: &str, conj: AdjConjugation) -> Vec<String> {
    match conj {
        AdjConjugation::Prenominal => vec![format!("{base}な")],
        AdjConjugation::Present => ["だ", "です", "でございます"]
            .iter()
            .map(|s| format!("{base}{s}"))
            .collect(),
        AdjConjugation::Negative => ["ではない", "でない", "じゃない", "ではありません"]
            .iter()
            .map(|s| format!("{base}{s}"))
            .collect(),
        AdjConjugation::Past => ["だった", "でした"].iter().map(|s| format!("{base}{s}")).collect(),
        AdjConjugation::NegativePast => [
            "ではなかった",
            "でなかった",
            "じゃなかった",
            "ではありませんでした",
        ]
        .iter()
        .map(|s| format!("{base}{s}"))
        .collect(),
        AdjConjugation::ConjunctiveTe => vec![format!("{base}で")],
        AdjConjugation::Adverbial => vec![format!("{base}に")],
        AdjConjugation::Conditional => ["なら", "ならば"].iter().map(|s| format!("{base}{s}")).collect(),
        AdjConjugation::TaraConditional => vec![format!("{base}だったら")],
        AdjConjugation::Tari => ["だったり", "でしたり"].iter().map(|s| format!("{base}{s}")).collect(),
        AdjConjugation::Noun => vec![format!("{base}さ")],
        AdjConjugation::StemSou => vec![format!("{base}そう")],
        AdjConjugation::StemNegativeSou => vec![format!("{base}じゃなさそう")],
    }
}

/// Conjugate an adjective's dictionary form into one or more surface forms.
pub fn conjugate(adjective: &str, conj: AdjConjugation, class: AdjectiveClass) -> Vec<String> {
    match class {
        AdjectiveClass::Na => conjugate_na(adjective, conj),
        AdjectiveClass::I => {
            let (stem, add_sa): (String, bool) = if matches!(adjective, "いい" | "良い" | "よい") {
                let stem = if adjective.starts_with('良') { "良" } else { "よ" };
                (stem.to_string(), true)
            } else if let Some(stem) = adjective.strip_suffix("ない") {
                (stem.to_string(), true)
            } else if let Some(stem) = adjective.strip_suffix('い') {
                (stem.to_string(), false)
            } else {
                (adjective.to_string(), false)
            };
            conjugate_i(&stem, conj, add_sa)
        }
    }
}

/// A matched adjective conjugation, as produced by [`deconjugate`].
#[derive(Debug, Clone)]
pub struct AdjDeconjugated {
    pub conjugation: AdjConjugation,
    pub result: Vec<String>,
}

/// Brute-force search over every [`AdjConjugation`] for ones whose surface
/// forms include `conjugated`. Unlike verb deconjugation there's no auxiliary
/// chain to unwind, so one pass over the closed form set suffices.
pub fn deconjugate(conjugated: &str, dictionary_form: &str, class: AdjectiveClass) -> Vec<AdjDeconjugated> {
    AdjConjugation::ALL
        .iter()
        .filter_map(|&conj| {
            let result = conjugate(dictionary_form, conj, class);
            if result.iter().any(|s| s == conjugated) {
                Some(AdjDeconjugated { conjugation: conj, result })
            } else {
                None
            }
        })
        .collect()
}

/// The adjective stem, used by callers that need it directly (e.g. a hint
/// generator composing its own suffixes).
pub fn stem(adjective: &str, class: AdjectiveClass) -> String {
    match class {
        AdjectiveClass::Na => adjective.to_string(),
        AdjectiveClass::I => {
            if matches!(adjective, "いい" | "良い" | "よい") {
                if adjective.starts_with('良') { "良" } else { "よ" }.to_string()
            } else {
                adjective
                    .strip_suffix('い')
                    .unwrap_or(adjective)
                    .to_string()
            }
        }
    }
}

/// Heuristic i/na classification from a bare dictionary form, used only when
/// the segmenter's own POS tagging doesn't already distinguish 形容詞 from
/// 形状詞. A small set of na-adjectives that happen to end in い are listed as
/// exceptions; everything else ending in い is treated as an i-adjective.
pub fn identify_class(adjective: &str) -> Option<AdjectiveClass> {
    const NA_ENDING_I: &[&str] = &["きれい", "綺麗", "嫌い", "きらい", "有名", "ゆうめい"];

    if NA_ENDING_I.contains(&adjective) {
        return Some(AdjectiveClass::Na);
    }
    if adjective.ends_with('い') {
        return Some(AdjectiveClass::I);
    }
    if adjective.ends_with('的') || adjective.ends_with('な') {
        return Some(AdjectiveClass::Na);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_adjective_negative() {
        assert_eq!(
            conjugate("高い", AdjConjugation::Negative, AdjectiveClass::I),
            vec!["高くない"]
        );
    }

    #[test]
    fn na_adjective_prenominal() {
        assert_eq!(
            conjugate("静か", AdjConjugation::Prenominal, AdjectiveClass::Na),
            vec!["静かな"]
        );
    }

    #[test]
    fn ii_irregular_stem() {
        assert_eq!(conjugate("いい", AdjConjugation::Negative, AdjectiveClass::I), vec!["よくない"]);
        assert_eq!(conjugate("良い", AdjConjugation::Negative, AdjectiveClass::I), vec!["良くない"]);
    }

    #[test]
    fn nai_ending_adjective_gets_sa_before_sou() {
        assert_eq!(
            conjugate("つまらない", AdjConjugation::StemSou, AdjectiveClass::I),
            vec!["つまらなさそう"]
        );
    }

    #[test]
    fn deconjugate_finds_negative_past() {
        let hits = deconjugate("高くなかった", "高い", AdjectiveClass::I);
        assert!(hits.iter().any(|h| h.conjugation == AdjConjugation::NegativePast));
    }

    #[test]
    fn identify_class_exception_list() {
        assert_eq!(identify_class("きれい"), Some(AdjectiveClass::Na));
        assert_eq!(identify_class("高い"), Some(AdjectiveClass::I));
        assert_eq!(identify_class("静か"), None);
    }
}
