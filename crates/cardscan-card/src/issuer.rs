//! Issuer identification by the 6-digit card prefix.
//!
//! The table is a compile-time constant sorted by prefix so lookups can
//! binary-search. It covers the fixed Iranian debit-card issuer set; there
//! is no partial-prefix or range matching, only exact 6-digit keys.

const ISSUER_PREFIXES: &[(&str, &str)] = &[
    ("207177", "b_tosee_saderat"),
    ("502229", "b_pasargad"),
    ("502806", "b_shahr"),
    ("502908", "b_taavon"),
    ("502910", "b_karafarin"),
    ("502938", "b_dey"),
    ("504172", "b_resalat"),
    ("504706", "b_shahr"),
    ("505416", "b_gardeshgari"),
    ("505785", "b_iranzamin"),
    ("505801", "io_kosar"),
    ("585983", "b_tejarat"),
    ("589210", "b_sepah"),
    ("589463", "b_refah"),
    ("603769", "b_saderat"),
    ("603770", "b_keshavarzi"),
    ("603799", "b_melli"),
    ("606265", "io_askarie"),
    ("606373", "b_mehr_iran"),
    ("610433", "b_mellat"),
    ("621986", "b_saman"),
    ("622106", "b_parsian"),
    ("627353", "b_tejarat"),
    ("627381", "b_ansar"),
    ("627412", "b_eghtesad_novin"),
    ("627488", "b_karafarin"),
    ("627648", "b_tosee_saderat"),
    ("627760", "b_post"),
    ("627884", "b_parsian"),
    ("627961", "b_sanat_madan"),
    ("628023", "b_maskan"),
    ("628157", "io_etebari_tose"),
    ("636214", "b_ayande"),
    ("636949", "b_hekmat"),
    ("639194", "b_parsian"),
    ("639217", "b_keshavarzi"),
    ("639346", "b_sina"),
    ("639347", "b_pasargad"),
    ("639370", "b_mehr_eqtesad"),
    ("639599", "b_ghavamin"),
    ("639607", "b_sarmaye"),
    ("991975", "b_mellat"),
];

/// Look up the issuer slug for a card number by its first 6 characters.
///
/// Inputs shorter than 6 characters (or not splittable at a character
/// boundary) return `None`, as does any prefix absent from the table.
pub fn issuer_slug(card_number: &str) -> Option<&'static str> {
    let prefix = card_number.get(..6)?;
    ISSUER_PREFIXES
        .binary_search_by_key(&prefix, |&(p, _)| p)
        .ok()
        .map(|idx| ISSUER_PREFIXES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in ISSUER_PREFIXES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn every_prefix_resolves_to_its_slug() {
        for &(prefix, slug) in ISSUER_PREFIXES {
            assert_eq!(issuer_slug(prefix), Some(slug));
        }
    }

    #[test]
    fn short_input_returns_none() {
        assert_eq!(issuer_slug(""), None);
        assert_eq!(issuer_slug("61043"), None);
    }

    #[test]
    fn unknown_prefix_returns_none() {
        assert_eq!(issuer_slug("000000"), None);
        assert_eq!(issuer_slug("4111111111111111"), None);
    }

    #[test]
    fn lookup_uses_only_the_first_six_characters() {
        assert_eq!(issuer_slug("6104331234567890"), Some("b_mellat"));
        assert_eq!(issuer_slug("610433"), Some("b_mellat"));
    }

    #[test]
    fn non_ascii_input_is_rejected_not_panicking() {
        assert_eq!(issuer_slug("۶۱۰۴۳۳"), None);
    }
}
