//! Unit tests for business codes and composite keys

use core_kernel::{CompanyCode, EmployeeCode, KeyFilter, RecordKey, SiteId};
use proptest::prelude::*;

mod code_tests {
    use super::*;

    #[test]
    fn test_from_str_and_string_agree() {
        assert_eq!(CompanyCode::from("C1"), CompanyCode::from("C1".to_string()));
    }

    #[test]
    fn test_into_inner_returns_raw_value() {
        assert_eq!(EmployeeCode::new("E42").into_inner(), "E42");
    }

    #[test]
    fn test_codes_deserialize_from_plain_strings() {
        let site: SiteId = serde_json::from_str("\"S7\"").unwrap();
        assert_eq!(site.as_str(), "S7");
    }

    #[test]
    fn test_codes_order_lexically() {
        let mut codes = vec![CompanyCode::new("C2"), CompanyCode::new("C10"), CompanyCode::new("A1")];
        codes.sort();
        let raw: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(raw, vec!["A1", "C10", "C2"]);
    }
}

mod key_tests {
    use super::*;

    #[test]
    fn test_keys_differ_by_site() {
        assert_ne!(RecordKey::new("S1", "C1"), RecordKey::new("S2", "C1"));
    }

    #[test]
    fn test_on_site_narrows_code_filter() {
        let filter = KeyFilter::by_code("C1").on_site("S2");
        assert!(filter.matches(&RecordKey::new("S2", "C1")));
        assert!(!filter.matches(&RecordKey::new("S1", "C1")));
        assert_eq!(filter.to_string(), "S2/C1");
    }
}

proptest! {
    #[test]
    fn by_key_matches_only_its_own_key(
        site in "[A-Z0-9]{1,4}",
        code in "[A-Z0-9]{1,4}",
        other_code in "[a-z]{1,4}",
    ) {
        let key = RecordKey::new(site.clone(), code);
        let filter = KeyFilter::by_key(&key);
        prop_assert!(filter.matches(&key));
        prop_assert!(!filter.matches(&RecordKey::new(site, other_code)));
    }

    #[test]
    fn non_blank_codes_make_complete_keys(site in "[A-Z]{1,4}", code in "[0-9]{1,4}") {
        prop_assert!(!RecordKey::new(site, code).is_incomplete());
    }
}
