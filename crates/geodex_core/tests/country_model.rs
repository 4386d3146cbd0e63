use geodex_core::{Country, COUNTRY_CODE_LEN};

#[test]
fn new_builds_record_from_parts() {
    let country = Country::new("GER", "Germany");

    assert_eq!(country.code, "GER");
    assert_eq!(country.name, "Germany");
    assert_eq!(country.code.chars().count(), COUNTRY_CODE_LEN);
}

#[test]
fn name_matches_ignores_case() {
    let country = Country::new("GER", "germany");

    assert!(country.name_matches("germany"));
    assert!(country.name_matches("GERMANY"));
    assert!(country.name_matches("Germany"));
    assert!(!country.name_matches("France"));
}

#[test]
fn code_identity_is_exact_case() {
    let lower = Country::new("ger", "Germany");
    let upper = Country::new("GER", "Germany");

    assert_ne!(lower, upper);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let country = Country::new("USA", "United States");

    let json = serde_json::to_value(&country).unwrap();
    assert_eq!(json["code"], "USA");
    assert_eq!(json["name"], "United States");

    let decoded: Country = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, country);
}
