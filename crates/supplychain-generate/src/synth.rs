//! Field-value synthesizer.
//!
//! Every function draws one plausible value for one field. Values come from
//! fixed pools, bounded ranges, or fixed string shapes; the only cross-field
//! dependency is [`risk_score`].

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, SecondaryAddress, StateAbbr, StreetName, ZipCode,
};
use fake::faker::company::en::{CompanyName, CompanySuffix};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::phone_number::en::PhoneNumber;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use supplychain_core::GeoCoords;

pub const COUNTRIES: &[&str] = &["US", "CN", "DE", "MX", "IN", "VN", "PL", "JP", "KR"];
pub const REGIONS: &[&str] = &["EMEA", "APAC", "AMERICAS"];
pub const INCOTERMS: &[&str] = &["DDP", "FOB", "CIF", "EXW"];
pub const CURRENCIES: &[&str] = &["USD", "CNY", "EUR", "INR", "JPY"];
pub const CERTIFICATIONS: &[&str] = &["ISO9001", "IATF16949", "AS9100", "ISO14001"];
pub const SUPPLIER_COMPLIANCE_FLAGS: &[&str] = &["ITAR", "REACH", "ROHS"];
pub const PART_COMPLIANCE_FLAGS: &[&str] = &["ROHS", "REACH", "ITAR"];
pub const UNITS_OF_MEASURE: &[&str] = &["EA", "KG", "M"];

/// Upper bound (exclusive) of the jitter added on top of `100 - on_time`.
pub const RISK_JITTER_MAX: f64 = 10.0;
/// Share of suppliers generated without coordinates.
pub const GEO_MISSING_RATE: f64 = 0.1;
/// Share of suppliers generated with a second address line.
pub const ADDRESS_LINE2_RATE: f64 = 0.25;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn pick<T: Copy>(values: &[T], rng: &mut dyn RngCore) -> T {
    let idx = rng.random_range(0..values.len());
    values[idx]
}

pub fn pick_text(values: &[&str], rng: &mut dyn RngCore) -> String {
    pick(values, rng).to_string()
}

/// Random subset of `values` with at least `min` members, in random order.
pub fn pick_subset(values: &[&str], min: usize, rng: &mut dyn RngCore) -> Vec<String> {
    let mut pool: Vec<&str> = values.to_vec();
    pool.shuffle(rng);
    let min = min.min(pool.len());
    let len = rng.random_range(min..=pool.len());
    pool.into_iter().take(len).map(str::to_string).collect()
}

pub fn digits(count: usize, rng: &mut dyn RngCore) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

pub fn letters(count: usize, rng: &mut dyn RngCore) -> String {
    (0..count).map(|_| char::from(pick(UPPERCASE, rng))).collect()
}

/// One letter followed by six digits, e.g. `K204518`.
pub fn supplier_code(rng: &mut dyn RngCore) -> String {
    format!("{}{}", letters(1, rng), digits(6, rng))
}

/// `P-` followed by six digits.
pub fn part_number(rng: &mut dyn RngCore) -> String {
    format!("P-{}", digits(6, rng))
}

pub fn contract_ref(rng: &mut dyn RngCore) -> String {
    format!("CONTRACT_{}", digits(4, rng))
}

pub fn terms_version(rng: &mut dyn RngCore) -> String {
    format!("{}.{}", digits(1, rng), digits(1, rng))
}

/// UUID-formatted identifier of a part specification.
pub fn spec_hash(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

pub fn bom_compatibility(rng: &mut dyn RngCore) -> Vec<String> {
    vec![letters(3, rng), letters(3, rng)]
}

/// On-time delivery percentage, `60.0..=100.0`.
pub fn on_time_delivery_rate(rng: &mut dyn RngCore) -> f64 {
    rng.random_range(60.0..=100.0)
}

/// Risk score derived from delivery reliability: the less often a supplier
/// delivers on time, the riskier it is.
pub fn risk_score(on_time_delivery_rate: f64, rng: &mut dyn RngCore) -> f64 {
    100.0 - on_time_delivery_rate + rng.random_range(0.0..RISK_JITTER_MAX)
}

/// Unit price in `1.00..=1000.00`, rounded to cents.
pub fn unit_cost(rng: &mut dyn RngCore) -> f64 {
    let value: f64 = rng.random_range(1.0..=1000.0);
    (value * 100.0).round() / 100.0
}

pub fn geo_coords(rng: &mut dyn RngCore) -> Option<GeoCoords> {
    if rng.random_bool(GEO_MISSING_RATE) {
        return None;
    }
    Some(GeoCoords {
        lat: rng.random_range(-90.0..=90.0),
        lon: rng.random_range(-180.0..=180.0),
    })
}

pub fn company_name(rng: &mut dyn RngCore) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn company_suffix(rng: &mut dyn RngCore) -> String {
    CompanySuffix().fake_with_rng(rng)
}

pub fn street_address(rng: &mut dyn RngCore) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

pub fn address_line2(rng: &mut dyn RngCore) -> Option<String> {
    if rng.random_bool(ADDRESS_LINE2_RATE) {
        Some(SecondaryAddress().fake_with_rng(rng))
    } else {
        None
    }
}

pub fn city(rng: &mut dyn RngCore) -> String {
    CityName().fake_with_rng(rng)
}

pub fn state(rng: &mut dyn RngCore) -> String {
    StateAbbr().fake_with_rng(rng)
}

pub fn postal_code(rng: &mut dyn RngCore) -> String {
    ZipCode().fake_with_rng(rng)
}

pub fn email(rng: &mut dyn RngCore) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn phone(rng: &mut dyn RngCore) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn description(rng: &mut dyn RngCore) -> String {
    Sentence(5..6).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn structured_strings_have_fixed_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let code = supplier_code(&mut rng);
            assert_eq!(code.len(), 7);
            assert!(code.chars().next().unwrap().is_ascii_uppercase());
            assert!(code[1..].chars().all(|c| c.is_ascii_digit()));

            let number = part_number(&mut rng);
            assert!(number.starts_with("P-"));
            assert_eq!(number.len(), 8);

            assert!(uuid::Uuid::parse_str(&spec_hash(&mut rng)).is_ok());
            assert!(contract_ref(&mut rng).starts_with("CONTRACT_"));
        }
    }

    #[test]
    fn risk_score_tracks_on_time_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let on_time = on_time_delivery_rate(&mut rng);
            assert!((60.0..=100.0).contains(&on_time));
            let offset = risk_score(on_time, &mut rng) - (100.0 - on_time);
            assert!((0.0..RISK_JITTER_MAX).contains(&offset), "offset {offset}");
        }
    }

    #[test]
    fn subset_respects_minimum_and_has_no_duplicates() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let subset = pick_subset(CERTIFICATIONS, 1, &mut rng);
            assert!(!subset.is_empty());
            let mut unique = subset.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), subset.len());
            assert!(subset.iter().all(|c| CERTIFICATIONS.contains(&c.as_str())));
        }
    }

    #[test]
    fn unit_cost_is_rounded_to_cents() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let cost = unit_cost(&mut rng);
            assert!((1.0..=1000.0).contains(&cost));
            assert_eq!(format!("{cost:.2}").parse::<f64>().unwrap(), cost);
        }
    }
}
