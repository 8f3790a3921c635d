//! The predicate grouper: absorbs a maximal run of trailing morphemes into a
//! head morpheme's compound span (spec.md §4.4).
//!
//! Grounded on `original_source/services/analyzer.py`'s `analyze()` grouping
//! loop (`is_tail_candidate`/`is_predicate_head`/particle surface whitelist)
//! and `conjugation/helpers.py::can_attach_morpheme`.

use crate::morpheme::{Morpheme, PartOfSpeech};

/// Connective particles that may extend a verb or i-adjective head.
/// Grounded on `analyzer.py`'s particle whitelist, narrowed to the set
/// spec.md §4.4 names (づつ/つつ appear in the Python comments but are never
/// actually enabled there, so they're excluded here too).
const VERB_CONNECTIVES: &[&str] = &["て", "で", "ば", "たら", "たり", "ながら"];
const ADJECTIVE_CONNECTIVES: &[&str] = &["て", "ば"];

fn is_predicate(pos: PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Verb | PartOfSpeech::Adjective | PartOfSpeech::NaAdjective)
}

/// Whether `next` attaches onto a span currently headed by `head_pos`,
/// treating `next` as the `n`-th trailing morpheme already considered a
/// possible na-adjective-as-noun head when `noun_as_na` is set (full view
/// only, spec.md §4.4's "if head is a noun (full-view only): as
/// na-adjective").
fn attaches<M: Morpheme>(head_pos: PartOfSpeech, next: &M, noun_as_na: bool) -> bool {
    let next_pos = next.part_of_speech();
    let tags = next.pos();

    match head_pos {
        PartOfSpeech::Verb => {
            (next_pos == PartOfSpeech::Auxiliary)
                || (next_pos == PartOfSpeech::Suffix)
                || tags.is_non_independent()
                || (tags.is_connective_particle() && VERB_CONNECTIVES.contains(&next.surface()))
                || (next_pos == PartOfSpeech::NaAdjective && next.surface() == "そう")
        }
        PartOfSpeech::NaAdjective | PartOfSpeech::Noun if head_pos == PartOfSpeech::NaAdjective || noun_as_na => {
            (next_pos == PartOfSpeech::Auxiliary)
                || (next_pos == PartOfSpeech::Adjective)
                || matches!(next.surface(), "じゃ" | "では" | "で")
        }
        PartOfSpeech::Adjective => {
            (next_pos == PartOfSpeech::Auxiliary)
                || (next_pos == PartOfSpeech::Adjective && tags.is_non_independent())
                || (tags.is_connective_particle() && ADJECTIVE_CONNECTIVES.contains(&next.surface()))
        }
        _ => false,
    }
}

/// Absorb trailing morphemes starting at `i+1` into the span headed by
/// `morphemes[i]`. Returns the exclusive end index `j` of the span
/// `[i..j)`. When `morphemes[i]` is not a predicate (or, in full view, a
/// noun), the span is just `[i..i+1)`.
///
/// Grounded on `analyzer.py`'s `analyze()` main loop buffer logic.
pub fn group<M: Morpheme>(morphemes: &[M], i: usize, full_view: bool) -> usize {
    let head = &morphemes[i];
    let head_pos = head.part_of_speech();

    let noun_as_na = full_view && head_pos == PartOfSpeech::Noun;
    if !is_predicate(head_pos) && !noun_as_na {
        return i + 1;
    }

    // では-then-は special case: admit ではない after a na-adjective head's で.
    let mut j = i + 1;
    let mut saw_de = false;
    while j < morphemes.len() {
        let next = &morphemes[j];
        if (head_pos == PartOfSpeech::NaAdjective || noun_as_na) && saw_de && next.surface() == "は" {
            j += 1;
            saw_de = false;
            continue;
        }
        if !attaches(head_pos, next, noun_as_na) {
            break;
        }
        saw_de = matches!(next.surface(), "で");
        j += 1;
    }
    j
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::{OwnedMorpheme, PosTags};

    fn m(surface: &str, dict: &str, main: &str, sub1: &str) -> OwnedMorpheme {
        OwnedMorpheme {
            surface: surface.to_string(),
            dictionary_form: dict.to_string(),
            reading: String::new(),
            pos: PosTags::new([main, sub1]),
        }
    }

    #[test]
    fn verb_absorbs_te_and_auxiliary() {
        let morphemes = vec![
            m("食べ", "食べる", "動詞", "一般"),
            m("られ", "られる", "助動詞", ""),
            m("なかっ", "ない", "助動詞", ""),
            m("た", "た", "助動詞", ""),
        ];
        assert_eq!(group(&morphemes, 0, false), 4);
    }

    #[test]
    fn verb_stops_at_non_connective_particle() {
        let morphemes = vec![m("食べ", "食べる", "動詞", "一般"), m("から", "から", "助詞", "接続助詞")];
        assert_eq!(group(&morphemes, 0, false), 1);
    }

    #[test]
    fn na_adjective_admits_dewa_ha() {
        let morphemes = vec![
            m("学生", "学生", "名詞", "普通名詞"),
            m("で", "で", "助詞", ""),
            m("は", "は", "助詞", ""),
            m("あり", "ある", "助動詞", ""),
            m("ませ", "ます", "助動詞", ""),
            m("ん", "ん", "助動詞", ""),
        ];
        assert_eq!(group(&morphemes, 0, true), 6);
    }

    #[test]
    fn non_predicate_head_is_singleton_outside_full_view() {
        let morphemes = vec![m("猫", "猫", "名詞", "普通名詞"), m("が", "が", "助詞", "格助詞")];
        assert_eq!(group(&morphemes, 0, false), 1);
    }
}
