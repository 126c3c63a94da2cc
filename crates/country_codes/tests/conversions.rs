use country_codes::{
    alpha2_to_alpha3, alpha2_to_numeric, alpha3_to_alpha2, countries, is_valid, numeric_to_alpha2,
    to_alpha2, to_alpha3, to_numeric, ErrorKind,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn alpha_and_numeric_round_trip_for_every_country() {
    for c in countries() {
        let a3 = alpha2_to_alpha3(c.alpha2).unwrap();
        assert_eq!(alpha3_to_alpha2(a3).unwrap(), c.alpha2);

        let num = alpha2_to_numeric(c.alpha2).unwrap();
        assert_eq!(numeric_to_alpha2(num).unwrap(), c.alpha2);
    }
}

#[test]
fn to_alpha2_agrees_across_forms() {
    for c in countries() {
        for form in [c.alpha2, c.alpha3, c.numeric] {
            assert_eq!(to_alpha2(to_alpha3(form).unwrap()).unwrap(), to_alpha2(form).unwrap());
            assert_eq!(to_alpha2(form).unwrap(), c.alpha2);
            assert_eq!(to_numeric(form).unwrap(), c.numeric);
        }
    }
}

#[test]
fn integer_numeric_codes_are_accepted() {
    assert_eq!(to_alpha2(4).unwrap(), "AF");
    assert_eq!(to_alpha3(840).unwrap(), "USA");
    assert!(is_valid(276));
    assert!(!is_valid(0));
    assert!(!is_valid(12345));
}

#[test]
fn malformed_code_is_a_validation_error() {
    assert_eq!(to_alpha2("ABCDE").unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(to_alpha3("").unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(to_alpha2("ZZ").unwrap_err().kind(), ErrorKind::NotFound);
}

proptest! {
    #[test]
    fn is_valid_agrees_with_lookups(code in "\\PC{0,6}") {
        prop_assert_eq!(is_valid(code.as_str()), to_alpha2(code.as_str()).is_ok());
        prop_assert_eq!(is_valid(code.as_str()), to_alpha3(code.as_str()).is_ok());
    }

    #[test]
    fn is_valid_agrees_for_integers(n in -2000i64..2000) {
        prop_assert_eq!(is_valid(n), numeric_to_alpha2(n).is_ok());
    }
}

#[test]
fn usize_and_u8_codes_are_accepted() {
    assert_eq!(to_alpha2(4usize).unwrap(), "AF");
    assert_eq!(to_alpha3(36u8).unwrap(), "AUS");
}
