//! Kana tables: the five vowel-row projection used by godan verb conjugation,
//! the te/ta sound-change table, and character classification.

use unicode_normalization::UnicodeNormalization;

/// One column of the five-column kana table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    A,
    I,
    U,
    E,
    O,
}

/// The vowel-row projections and te/ta sound changes for one godan terminal
/// kana (the う-row kana a dictionary-form verb ends in).
#[derive(Debug, Clone, Copy)]
pub struct GodanRow {
    pub a: &'static str,
    pub i: &'static str,
    pub u: &'static str,
    pub e: &'static str,
    pub o: &'static str,
    /// Te-form sound change, e.g. く → いて.
    pub te: &'static str,
    /// Ta-form sound change, e.g. く → いた.
    pub ta: &'static str,
}

impl GodanRow {
    pub fn column(&self, row: Row) -> &'static str {
        match row {
            Row::A => self.a,
            Row::I => self.i,
            Row::U => self.u,
            Row::E => self.e,
            Row::O => self.o,
        }
    }

    /// Tara is Ta plus ら; Tari is Ta plus り (spec.md §4.1).
    pub fn tara(&self) -> String {
        format!("{}ら", self.ta)
    }

    pub fn tari(&self) -> String {
        format!("{}り", self.ta)
    }
}

const U: GodanRow = GodanRow {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "って",
    ta: "った",
};

const KU: GodanRow = GodanRow {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "いて",
    ta: "いた",
};

const GU: GodanRow = GodanRow {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
    te: "いで",
    ta: "いだ",
};

const SU: GodanRow = GodanRow {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
    te: "して",
    ta: "した",
};

const TSU: GodanRow = GodanRow {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
    te: "って",
    ta: "った",
};

const NU: GodanRow = GodanRow {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
    te: "んで",
    ta: "んだ",
};

const BU: GodanRow = GodanRow {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
    te: "んで",
    ta: "んだ",
};

const MU: GodanRow = GodanRow {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
    te: "んで",
    ta: "んだ",
};

const RU: GodanRow = GodanRow {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
    te: "って",
    ta: "った",
};

/// 行く/いく is the one godan-く verb that takes gemination in te/ta instead of
/// the い-onbin every other く verb takes (spec.md §4.1).
const IKU: GodanRow = GodanRow {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "って",
    ta: "った",
};

/// Look up the vowel-row table for a godan verb's terminal kana.
///
/// `is_iku` distinguishes 行く/ゆく from ordinary く-row verbs, which share
/// every column except te/ta.
pub fn godan_row(terminal: char, is_iku: bool) -> Option<&'static GodanRow> {
    if is_iku && terminal == 'く' {
        return Some(&IKU);
    }

    Some(match terminal {
        'う' => &U,
        'く' => &KU,
        'ぐ' => &GU,
        'す' => &SU,
        'つ' => &TSU,
        'ぬ' => &NU,
        'ぶ' => &BU,
        'む' => &MU,
        'る' => &RU,
        _ => return None,
    })
}

/// The i-row and e-row hiragana (plus their katakana counterparts, which the
/// segmenter may emit in readings) used by the ichidan/godan fallback
/// heuristic of spec.md §3: a lemma ending in る whose penultimate character
/// is in this set is classified ichidan, else godan.
const ICHIDAN_PENULTIMATE: &[char] = &[
    'い', 'き', 'し', 'ち', 'に', 'ひ', 'み', 'り', 'ぎ', 'じ', 'び', 'ぴ', 'え', 'け', 'せ', 'て',
    'ね', 'へ', 'め', 'れ', 'げ', 'ぜ', 'べ', 'ぺ', 'イ', 'キ', 'シ', 'チ', 'ニ', 'ヒ', 'ミ', 'リ',
    'ギ', 'ジ', 'ビ', 'ピ', 'エ', 'ケ', 'セ', 'テ', 'ネ', 'ヘ', 'メ', 'レ', 'ゲ', 'ゼ', 'ベ', 'ペ',
];

/// Heuristic ichidan/godan classification for a bare lemma, used only when the
/// segmenter's own inflection tagging is absent (spec.md §3).
pub fn looks_ichidan(lemma: &str) -> bool {
    let chars: Vec<char> = lemma.chars().collect();
    if chars.len() < 2 || chars[chars.len() - 1] != 'る' {
        return false;
    }
    ICHIDAN_PENULTIMATE.contains(&chars[chars.len() - 2])
}

pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309f}')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30a0}'..='\u{30ff}')
}

/// True if every character in `text` is hiragana (ignoring the lone chouon mark
/// ー, which can appear in casual kana spellings).
pub fn is_all_hiragana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// True if the majority of characters in `text` are katakana — used to filter
/// likely proper nouns/loanwords with no dictionary gloss (spec.md §4.6,
/// grounded on `original_source/services/analyzer.py::_is_katakana`).
pub fn is_mostly_katakana(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let total = text.chars().count();
    let katakana = text.chars().filter(|&c| is_katakana(c)).count();
    (katakana as f64) / (total as f64) > 0.5
}

/// NFD-decompose and strip the combining voiced/semi-voiced sound marks
/// (U+3099, U+309A), so that homophones differing only by dakuten/handakuten
/// compare equal. Grounded on
/// `original_source/services/jmdict.py::_normalize_kana`.
pub fn normalize_voicing(text: &str) -> String {
    text.nfd()
        .filter(|c| *c != '\u{3099}' && *c != '\u{309a}')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn godan_row_lookup() {
        let row = godan_row('く', false).unwrap();
        assert_eq!(row.a, "か");
        assert_eq!(row.te, "いて");
    }

    #[test]
    fn iku_takes_gemination() {
        let row = godan_row('く', true).unwrap();
        assert_eq!(row.te, "って");
        assert_eq!(row.ta, "った");
    }

    #[test]
    fn tara_tari_derive_from_ta() {
        let row = godan_row('ぬ', false).unwrap();
        assert_eq!(row.tara(), "んだら");
        assert_eq!(row.tari(), "んだり");
    }

    #[test]
    fn ichidan_heuristic() {
        assert!(looks_ichidan("食べる"));
        assert!(looks_ichidan("見る"));
        assert!(!looks_ichidan("走る"));
        assert!(!looks_ichidan("作る"));
    }

    #[test]
    fn voicing_normalization_matches_dakuten_pairs() {
        assert_eq!(normalize_voicing("は"), normalize_voicing("は"));
        assert_eq!(normalize_voicing("ば"), "は");
    }

    #[test]
    fn katakana_ratio() {
        assert!(is_mostly_katakana("コンピューター"));
        assert!(!is_mostly_katakana("食べる"));
    }
}
