//! Brute-force deconjugation: given a conjugated surface and a dictionary
//! form, search every plausible auxiliary chain up to depth 3 and report
//! which ones actually produce that surface.
//!
//! Grounded on `original_source/services/verb.py::deconjugate_verb`. This is
//! deliberately not a parser — there's no attempt to segment the surface
//! form into morphemes; every candidate chain is forward-conjugated and
//! tested for membership in the result (spec.md §4.3, "generate and test").

use super::auxiliary::{self, Auxiliary};
use super::verb;
use super::Conjugation;

/// Verbs that legitimately end in れる and must never be reinterpreted as a
/// ra-nuki colloquial potential (入れる "to put in" is not "入る" + potential,
/// etc). Treated as a configuration knob, not a proof (spec.md §9 Open
/// Question (2)): seeded with both the original's listed members and its
/// named gaps (しびれる, 崩れる).
pub const RANUKI_SKIP_LIST: &[&str] =
    &["入れる", "忘れる", "触れる", "離れる", "現れる", "流れる", "しびれる", "崩れる"];

/// If `dictionary_form` looks like a ra-nuki colloquial potential (ends in
/// れる, not on [`RANUKI_SKIP_LIST`], and `has_entry` reports no dictionary
/// entry for it but one for the shortened ichidan lemma), return the
/// reassigned shorter lemma (spec.md §4.1's "Ra-nuki normalization").
pub fn ranuki_normalize(dictionary_form: &str, has_entry: impl Fn(&str) -> bool) -> Option<String> {
    if RANUKI_SKIP_LIST.contains(&dictionary_form) {
        return None;
    }
    let stripped = dictionary_form.strip_suffix("れる")?;
    if has_entry(dictionary_form) {
        return None;
    }
    let shortened = format!("{stripped}る");
    has_entry(&shortened).then_some(shortened)
}

/// One matching auxiliary chain and terminal conjugation found by
/// [`deconjugate`].
#[derive(Debug, Clone)]
pub struct Deconjugated {
    pub auxiliaries: Vec<Auxiliary>,
    pub conjugation: Conjugation,
    pub result: Vec<String>,
}

/// Auxiliaries that can plausibly sit in a non-final chain position — the
/// search space is restricted to this list rather than every `Auxiliary`
/// variant, since most auxiliaries are terminal-only or make no sense
/// stacked. Grounded on `deconjugate_verb`'s `penultimates` list.
const PENULTIMATES: &[Auxiliary] = &[
    Auxiliary::Ageru,
    Auxiliary::Sashiageru,
    Auxiliary::Yaru,
    Auxiliary::Morau,
    Auxiliary::Itadaku,
    Auxiliary::Kureru,
    Auxiliary::Kudasaru,
    Auxiliary::Nasai,
    Auxiliary::Miru,
    Auxiliary::Iku,
    Auxiliary::Kuru,
    Auxiliary::Oku,
    Auxiliary::Shimau,
    Auxiliary::TeIru,
    Auxiliary::TeAru,
    Auxiliary::TeOru,
    Auxiliary::Potential,
    Auxiliary::ReruRareru,
    Auxiliary::SeruSaseru,
];

/// Auxiliaries allowed as the final element of a depth-2 chain. Grounded on
/// `deconjugate_verb`'s `depth2_finals` list.
const DEPTH2_FINALS: &[Auxiliary] = &[
    Auxiliary::Masu,
    Auxiliary::SoudaConjecture,
    Auxiliary::SoudaHearsay,
    Auxiliary::TeIru,
    Auxiliary::Tai,
    Auxiliary::Nai,
    Auxiliary::Yaru,
    Auxiliary::Miru,
    Auxiliary::Oku,
    Auxiliary::Shimau,
];

/// Grounded on `deconjugate_verb`'s `antepenultimates` list.
const ANTEPENULTIMATES: &[Auxiliary] = &[Auxiliary::SeruSaseru, Auxiliary::ReruRareru, Auxiliary::Itadaku];

/// Grounded on `deconjugate_verb`'s `depth3_finals` list.
const DEPTH3_FINALS: &[Auxiliary] = &[Auxiliary::Masu];

/// All 36 [`Auxiliary`] variants, used by the exhaustive depth-1 pass.
const ALL_AUXILIARIES: &[Auxiliary] = &[
    Auxiliary::Potential,
    Auxiliary::Masu,
    Auxiliary::Nai,
    Auxiliary::Tai,
    Auxiliary::Tagaru,
    Auxiliary::Hoshii,
    Auxiliary::Rashii,
    Auxiliary::SoudaHearsay,
    Auxiliary::SoudaConjecture,
    Auxiliary::SeruSaseru,
    Auxiliary::ShortenedCausative,
    Auxiliary::ReruRareru,
    Auxiliary::CausativePassive,
    Auxiliary::ShortenedCausativePassive,
    Auxiliary::Ageru,
    Auxiliary::Sashiageru,
    Auxiliary::Yaru,
    Auxiliary::Morau,
    Auxiliary::Itadaku,
    Auxiliary::Kureru,
    Auxiliary::Kudasaru,
    Auxiliary::Nasai,
    Auxiliary::TeIru,
    Auxiliary::TeAru,
    Auxiliary::Miru,
    Auxiliary::Iku,
    Auxiliary::Kuru,
    Auxiliary::Oku,
    Auxiliary::Shimau,
    Auxiliary::TeOru,
    Auxiliary::Sugiru,
    Auxiliary::Yasui,
    Auxiliary::Nikui,
    Auxiliary::Hajimeru,
    Auxiliary::Owaru,
    Auxiliary::Tsuzukeru,
    Auxiliary::Dasu,
    Auxiliary::Garu,
    Auxiliary::SouAppearance,
];

fn try_chain(
    conjugated: &str,
    dictionary_form: &str,
    auxiliaries: &[Auxiliary],
    conj: Conjugation,
    type2: bool,
    hits: &mut Vec<Deconjugated>,
) {
    if let Ok(result) = auxiliary::conjugate_chain(dictionary_form, auxiliaries, conj, type2) {
        if result.iter().any(|s| s == conjugated) {
            hits.push(Deconjugated {
                auxiliaries: auxiliaries.to_vec(),
                conjugation: conj,
                result,
            });
        }
    }
}

/// Search for every auxiliary chain (depth 0 through `max_aux_depth`, capped
/// at 3) and terminal conjugation that could have produced `conjugated` from
/// `dictionary_form`. Depth 0 is a bare conjugation with no auxiliaries at
/// all.
pub fn deconjugate(
    conjugated: &str,
    dictionary_form: &str,
    type2: bool,
    max_aux_depth: u8,
) -> Vec<Deconjugated> {
    let mut hits = Vec::new();

    for &conj in Conjugation::ALL {
        if let Some(result) = verb::conjugate(dictionary_form, conj, type2) {
            if result.iter().any(|s| s == conjugated) {
                hits.push(Deconjugated { auxiliaries: vec![], conjugation: conj, result });
            }
        }
    }

    if max_aux_depth < 1 {
        return hits;
    }

    for &aux in ALL_AUXILIARIES {
        for &conj in Conjugation::ALL {
            try_chain(conjugated, dictionary_form, &[aux], conj, type2, &mut hits);
        }
    }

    if max_aux_depth < 2 {
        return hits;
    }

    for &penultimate in PENULTIMATES {
        for &last in DEPTH2_FINALS {
            for &conj in Conjugation::ALL {
                try_chain(conjugated, dictionary_form, &[penultimate, last], conj, type2, &mut hits);
            }
        }
    }

    if max_aux_depth < 3 {
        return hits;
    }

    for &ante in ANTEPENULTIMATES {
        for &penultimate in PENULTIMATES {
            for &last in DEPTH3_FINALS {
                for &conj in Conjugation::ALL {
                    try_chain(
                        conjugated,
                        dictionary_form,
                        &[ante, penultimate, last],
                        conj,
                        type2,
                        &mut hits,
                    );
                }
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth0_finds_bare_negative() {
        let hits = deconjugate("書かない", "書く", false, 3);
        assert!(hits
            .iter()
            .any(|h| h.auxiliaries.is_empty() && h.conjugation == Conjugation::Negative));
    }

    #[test]
    fn depth1_finds_potential() {
        let hits = deconjugate("書ける", "書く", false, 3);
        assert!(hits
            .iter()
            .any(|h| h.auxiliaries == vec![Auxiliary::Potential] && h.conjugation == Conjugation::Dictionary));
    }

    #[test]
    fn depth2_finds_passive_plus_negative_past() {
        let hits = deconjugate("食べられなかった", "食べる", true, 3);
        assert!(hits.iter().any(|h| {
            h.auxiliaries == vec![Auxiliary::ReruRareru, Auxiliary::Nai] && h.conjugation == Conjugation::Ta
        }));
    }

    #[test]
    fn max_depth_zero_only_searches_bare_conjugations() {
        let hits = deconjugate("書ける", "書く", false, 0);
        assert!(hits.is_empty());
    }

    #[test]
    fn ranuki_rewrites_to_shorter_lemma() {
        let known = ["食べる"];
        let result = ranuki_normalize("食べれる", |w| known.contains(&w));
        assert_eq!(result, Some("食べる".to_string()));
    }

    #[test]
    fn ranuki_skip_list_blocks_legitimate_reru_verb() {
        let known = ["入れる", "入る"];
        let result = ranuki_normalize("入れる", |w| known.contains(&w));
        assert_eq!(result, None);
    }
}
