use folio_domain::constants::{DEFAULT_LANG, DEFAULT_SCHEDULED_POST_MARGIN_MS, MAIL};

#[test]
fn constants_match_expected_values() {
    assert_eq!(MAIL, "Mail");
    assert_eq!(DEFAULT_LANG, "en");
    assert_eq!(DEFAULT_SCHEDULED_POST_MARGIN_MS, 900_000);
}
