//! Forward conjugation for verbs, without auxiliaries: the five-column
//! vowel-row projection, the te/ta sound-change table, and the irregular
//! verbs (する, くる, だ, です) and special-case stems (ある, ござる,
//! いらっしゃる, -くださる) that don't follow either regular table.
//!
//! Every function here returns `None` rather than raising on an
//! unsupported `(verb, Conjugation)` combination — callers (particularly the
//! deconjugation search) rely on that to silently skip invalid guesses.
//!
//! Grounded on `original_source/services/verb.py`'s `_conjugate_type1`/
//! `_conjugate_type2`/`_conjugate_kuru`/`_conjugate_suru`/`_conjugate_da`/
//! `_conjugate_desu`/`conjugate`, and on the teacher's `inflection/godan.rs`
//! table shape for the regular godan data.

use crate::kana::{self, Row};

use super::Conjugation;

fn conj_to_row(conj: Conjugation) -> Option<Row> {
    match conj {
        Conjugation::Negative | Conjugation::Zu | Conjugation::Nu => Some(Row::A),
        Conjugation::Conjunctive => Some(Row::I),
        Conjugation::Dictionary => Some(Row::U),
        Conjugation::Conditional => Some(Row::E),
        Conjugation::Volitional => Some(Row::O),
        _ => None,
    }
}

/// A small number of verbs whose stems don't follow either regular table at
/// all. Grounded on `verb.py::_SPECIAL_CASES`.
fn special_case(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    match verb {
        "ある" if conj == Conjugation::Negative => Some(vec![String::new()]),
        "ござる" if conj == Conjugation::Conjunctive => Some(vec!["ござい".to_string()]),
        "いらっしゃる"
            if matches!(
                conj,
                Conjugation::Conjunctive | Conjugation::Conditional | Conjugation::Imperative
            ) =>
        {
            Some(vec!["いらっしゃい".to_string()])
        }
        _ => None,
    }
}

fn conjugate_type1(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    match verb {
        "する" => return conjugate_suru(conj),
        "くる" | "来る" => return conjugate_kuru(verb, conj),
        "だ" => return conjugate_da(conj),
        "です" => return conjugate_desu(conj),
        _ => {}
    }

    if let Some(head) = verb.strip_suffix("くださる") {
        return match conj {
            Conjugation::Dictionary => Some(vec![verb.to_string()]),
            Conjugation::Conjunctive => Some(vec![format!("{head}ください")]),
            _ => None,
        };
    }

    if let Some(result) = special_case(verb, conj) {
        return Some(result);
    }

    let chars: Vec<char> = verb.chars().collect();
    let tail = *chars.last()?;
    let head: String = chars[..chars.len() - 1].iter().collect();

    if let Some(row) = conj_to_row(conj) {
        if tail == 'う' && row == Row::A {
            return Some(vec![format!("{head}わ")]);
        }
        let table = kana::godan_row(tail, false)?;
        return Some(vec![format!("{head}{}", table.column(row))]);
    }

    if conj == Conjugation::Imperative {
        let table = kana::godan_row(tail, false)?;
        return Some(vec![format!("{head}{}", table.e)]);
    }

    let is_iku = verb == "行く" || verb == "いく";
    let table = kana::godan_row(tail, is_iku)?;

    match conj {
        Conjugation::Te => Some(vec![format!("{head}{}", table.te)]),
        Conjugation::Ta => Some(vec![format!("{head}{}", table.ta)]),
        Conjugation::Tara => Some(vec![format!("{head}{}", table.tara())]),
        Conjugation::Tari => Some(vec![format!("{head}{}", table.tari())]),
        _ => None,
    }
}

fn conjugate_type2(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    match verb {
        "する" => return conjugate_suru(conj),
        "くる" | "来る" => return conjugate_kuru(verb, conj),
        "だ" => return conjugate_da(conj),
        "です" => return conjugate_desu(conj),
        _ => {}
    }

    let head = verb.strip_suffix('る')?;

    Some(match conj {
        Conjugation::Negative | Conjugation::Zu | Conjugation::Nu | Conjugation::Conjunctive => {
            vec![head.to_string()]
        }
        Conjugation::Dictionary => vec![verb.to_string()],
        Conjugation::Conditional => vec![format!("{head}れ")],
        Conjugation::Imperative => vec![format!("{head}ろ"), format!("{head}よ")],
        Conjugation::Volitional => vec![format!("{head}よう")],
        Conjugation::Te => vec![format!("{head}て")],
        Conjugation::Ta => vec![format!("{head}た")],
        Conjugation::Tara => vec![format!("{head}たら")],
        Conjugation::Tari => vec![format!("{head}たり")],
    })
}

fn conjugate_kuru(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    let prefix = if verb.starts_with('来') { "来" } else { "" };

    Some(match conj {
        Conjugation::Negative | Conjugation::Zu | Conjugation::Nu => vec![format!("{prefix}こ")],
        Conjugation::Conjunctive => vec![format!("{prefix}き")],
        Conjugation::Dictionary => vec![format!("{prefix}くる")],
        Conjugation::Conditional => vec![format!("{prefix}くれ")],
        Conjugation::Imperative => vec![format!("{prefix}こい")],
        Conjugation::Volitional => vec![format!("{prefix}こよう")],
        Conjugation::Te => vec![format!("{prefix}きて")],
        Conjugation::Ta => vec![format!("{prefix}きた")],
        Conjugation::Tara => vec![format!("{prefix}きたら")],
        Conjugation::Tari => vec![format!("{prefix}きたり")],
    })
}

fn conjugate_suru(conj: Conjugation) -> Option<Vec<String>> {
    Some(match conj {
        Conjugation::Negative => vec!["し".to_string()],
        Conjugation::Conjunctive => vec!["し".to_string()],
        Conjugation::Dictionary => vec!["する".to_string()],
        Conjugation::Conditional => vec!["すれ".to_string()],
        Conjugation::Imperative => vec!["しろ".to_string(), "せよ".to_string()],
        Conjugation::Volitional => vec!["しよう".to_string()],
        Conjugation::Te => vec!["して".to_string()],
        Conjugation::Ta => vec!["した".to_string()],
        Conjugation::Tara => vec!["したら".to_string()],
        Conjugation::Tari => vec!["したり".to_string()],
        Conjugation::Zu => vec!["せず".to_string()],
        Conjugation::Nu => vec!["せぬ".to_string()],
    })
}

fn conjugate_da(conj: Conjugation) -> Option<Vec<String>> {
    Some(match conj {
        Conjugation::Negative => vec!["でない".into(), "ではない".into(), "じゃない".into()],
        Conjugation::Dictionary => vec!["だ".into()],
        Conjugation::Conditional => vec!["なら".into()],
        Conjugation::Te => vec!["で".into()],
        Conjugation::Ta => vec!["だった".into()],
        Conjugation::Tara => vec!["だったら".into()],
        Conjugation::Tari => vec!["だったり".into()],
        _ => return None,
    })
}

fn conjugate_desu(conj: Conjugation) -> Option<Vec<String>> {
    Some(match conj {
        Conjugation::Negative => vec!["でありません".into(), "ではありません".into()],
        Conjugation::Dictionary => vec!["です".into()],
        Conjugation::Te => vec!["でして".into()],
        Conjugation::Ta => vec!["でした".into()],
        Conjugation::Tara => vec!["でしたら".into()],
        Conjugation::Tari => vec!["でしたり".into()],
        _ => return None,
    })
}

fn conjugate_strict(verb: &str, conj: Conjugation, type2: bool) -> Option<Vec<String>> {
    if verb.ends_with('る') && type2 {
        conjugate_type2(verb, conj)
    } else {
        conjugate_type1(verb, conj)
    }
}

/// The godan table forced regardless of `verb`'s actual class, used by
/// auxiliary attachment to build a new host verb (e.g. potential's れる-stem)
/// before re-conjugating it. Grounded on `verb.py::_conjugate_auxiliary`'s
/// direct calls to `_conjugate_type1`.
pub(crate) fn type1_raw(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    conjugate_type1(verb, conj)
}

/// The ichidan table forced regardless of `verb`'s actual class. See
/// [`type1_raw`].
pub(crate) fn type2_raw(verb: &str, conj: Conjugation) -> Option<Vec<String>> {
    conjugate_type2(verb, conj)
}

/// Conjugate a bare verb (no auxiliaries) into its full terminal surface
/// form(s). The returned list's first element is always the bare host
/// stem/base that auxiliary attachment uses; further elements (when the
/// conjugation carries a terminal suffix) are complete surfaces.
///
/// Grounded on `verb.py::conjugate`.
pub fn conjugate(verb: &str, conj: Conjugation, type2: bool) -> Option<Vec<String>> {
    let mut result = conjugate_strict(verb, conj, type2)?;

    match conj {
        Conjugation::Negative if verb != "だ" && verb != "です" => {
            let base = result[0].clone();
            result.push(format!("{base}ない"));
        }
        Conjugation::Zu if verb != "だ" && verb != "です" => {
            let base = result[0].clone();
            result.push(format!("{base}ず"));
        }
        Conjugation::Nu if verb != "だ" && verb != "です" => {
            let base = result[0].clone();
            result.push(format!("{base}ぬ"));
        }
        Conjugation::Conjunctive => {
            let base = result[0].clone();
            result.push(format!("{base}ます"));
        }
        Conjugation::Conditional => {
            let base = result[0].clone();
            result.push(format!("{base}ば"));
        }
        Conjugation::Volitional => {
            let base = result[0].clone();
            result.push(format!("{base}う"));
        }
        _ => {}
    }

    Some(result)
}

/// The bare host stem/base for a conjugation, used by auxiliary attachment.
pub fn stem(verb: &str, conj: Conjugation, type2: bool) -> Option<String> {
    conjugate(verb, conj, type2).map(|mut v| v.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn godan_negative() {
        let result = conjugate("書く", Conjugation::Negative, false).unwrap();
        assert_eq!(result, vec!["書か", "書かない"]);
    }

    #[test]
    fn godan_te_onbin() {
        let result = conjugate("書く", Conjugation::Te, false).unwrap();
        assert_eq!(result, vec!["書いて"]);
    }

    #[test]
    fn iku_gemination_not_onbin() {
        let result = conjugate("行く", Conjugation::Te, false).unwrap();
        assert_eq!(result, vec!["行って"]);
    }

    #[test]
    fn u_ending_negative_uses_wa() {
        let result = conjugate("買う", Conjugation::Negative, false).unwrap();
        assert_eq!(result, vec!["買わ", "買わない"]);
    }

    #[test]
    fn ichidan_negative_bare_stem() {
        let result = conjugate("食べる", Conjugation::Negative, true).unwrap();
        assert_eq!(result, vec!["食べ", "食べない"]);
    }

    #[test]
    fn suru_dictionary() {
        let result = conjugate("する", Conjugation::Dictionary, true).unwrap();
        assert_eq!(result, vec!["する"]);
    }

    #[test]
    fn kuru_kanji_prefix() {
        let result = conjugate("来る", Conjugation::Ta, true).unwrap();
        assert_eq!(result, vec!["来きた"]);
    }

    #[test]
    fn da_negative_has_three_surfaces() {
        let result = conjugate_da(Conjugation::Negative).unwrap();
        assert_eq!(result, vec!["でない", "ではない", "じゃない"]);
    }

    #[test]
    fn aru_negative_is_nai_only() {
        let result = conjugate("ある", Conjugation::Negative, false).unwrap();
        assert_eq!(result, vec!["", "ない"]);
    }

    #[test]
    fn dictionary_form_is_identity() {
        for verb in ["書く", "食べる", "する", "くる", "だ", "です"] {
            let type2 = verb == "食べる";
            let result = conjugate(verb, Conjugation::Dictionary, type2).unwrap();
            assert!(result.contains(&verb.to_string()));
        }
    }
}
