//! Round-trip properties for the term codec.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use evalkit_term::{DecodedTerm, TermDescriptor, decode, encode, parse_key};

fn season() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Spring", "Summer", "Fall", "Winter"])
}

fn roman() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["I", "II", "III", "IV"])
}

proptest! {
    #[test]
    fn decode_preserves_description_fields(
        year in 1900u32..2100,
        season in season(),
        roman in roman(),
    ) {
        let text = format!("{year} {season} Term {roman}");
        match decode(&text) {
            DecodedTerm::Decoded(descriptor) => {
                prop_assert_eq!(descriptor.year, year.to_string());
                prop_assert_eq!(descriptor.season, season);
                prop_assert_eq!(descriptor.roman, roman);
            }
            DecodedTerm::Unparsed(original) => {
                return Err(TestCaseError::fail(format!(
                    "well-formed description failed to decode: {original}"
                )));
            }
        }
    }

    #[test]
    fn encoded_key_parses_back_to_same_key(
        year in 1900u32..2100,
        season in season(),
        roman in roman(),
        section in 1u32..100,
    ) {
        let descriptor = TermDescriptor {
            year: year.to_string(),
            season: season.to_string(),
            roman: roman.to_string(),
        };
        let key = encode(&descriptor, section);
        let (parsed, parsed_section) = parse_key(&key)
            .ok_or_else(|| TestCaseError::fail(format!("key failed to parse: {key}")))?;
        prop_assert_eq!(parsed_section, section);
        prop_assert_eq!(&parsed.season, season);
        prop_assert_eq!(&parsed.roman, roman);
        prop_assert_eq!(encode(&parsed, parsed_section), key);
    }

    #[test]
    fn description_to_key_and_back(
        year in 1900u32..2100,
        season in season(),
        roman in roman(),
        section in 1u32..100,
    ) {
        let text = format!("{year} {season} Term {roman}");
        let DecodedTerm::Decoded(descriptor) = decode(&text) else {
            return Err(TestCaseError::fail("well-formed description failed to decode"));
        };
        let key = encode(&descriptor, section);
        let (round, _) = parse_key(&key)
            .ok_or_else(|| TestCaseError::fail("encoded key failed to parse"))?;
        prop_assert_eq!(round.year, descriptor.year);
        prop_assert_eq!(round.season, descriptor.season);
        prop_assert_eq!(round.roman, descriptor.roman);
    }
}
