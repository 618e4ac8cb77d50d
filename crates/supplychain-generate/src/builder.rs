use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use supplychain_core::{
    ApprovalStatus, HazardClass, LifecycleStatus, Part, PartCategory, QualityGrade, RiskTier,
    SCHEMA_VERSION, SYNTHETIC_DATA_SOURCE, Supplier,
};

use crate::ids::IdSource;
use crate::model::GenerateOptions;
use crate::synth;

/// Builds `Supplier` and `Part` records from an explicit random source.
///
/// All randomness flows through the generator's own RNG; nothing reads
/// process-wide state apart from the system clock when no reference time
/// was configured.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    rng: ChaCha8Rng,
    ids: IdSource,
    seed: Option<u64>,
    reference_time: Option<DateTime<Utc>>,
}

impl RecordGenerator {
    pub fn new(options: &GenerateOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            rng,
            ids: IdSource::new(),
            seed: options.seed,
            reference_time: options.reference_time,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    /// Next ID from the generator's monotonic source, for records that are
    /// not built here (e.g. created over HTTP).
    pub fn next_id(&mut self) -> String {
        let now = self.now();
        self.ids.next_id(now, &mut self.rng).to_string()
    }

    pub fn next_supplier_code(&mut self) -> String {
        synth::supplier_code(&mut self.rng)
    }

    /// Build one supplier for `tenant_id`.
    pub fn build_supplier(&mut self, tenant_id: &str) -> Supplier {
        let now = self.now();
        let supplier_id = self.ids.next_id(now, &mut self.rng).to_string();
        let rng: &mut dyn RngCore = &mut self.rng;

        let on_time_delivery_rate = synth::on_time_delivery_rate(rng);
        let risk_score = synth::risk_score(on_time_delivery_rate, rng);

        Supplier {
            supplier_id,
            tenant_id: tenant_id.to_string(),
            supplier_code: synth::supplier_code(rng),

            legal_name: synth::company_name(rng),
            dba_name: synth::company_suffix(rng),
            country: synth::pick_text(synth::COUNTRIES, rng),
            region: synth::pick_text(synth::REGIONS, rng),

            address_line1: synth::street_address(rng),
            address_line2: synth::address_line2(rng),
            city: synth::city(rng),
            state: synth::state(rng),
            postal_code: synth::postal_code(rng),

            contact_email: synth::email(rng),
            contact_phone: synth::phone(rng),

            preferred_currency: synth::pick_text(synth::CURRENCIES, rng),
            incoterms: synth::pick_text(synth::INCOTERMS, rng),

            lead_time_days_avg: rng.random_range(3..=90),
            lead_time_days_p95: rng.random_range(7..=180),
            on_time_delivery_rate,
            defect_rate_ppm: rng.random_range(50..=1000),
            capacity_units_per_week: rng.random_range(100..=10_000),
            risk_score,
            financial_risk_tier: synth::pick(RiskTier::ALL, rng),

            certifications: synth::pick_subset(synth::CERTIFICATIONS, 1, rng),
            compliance_flags: synth::pick_subset(synth::SUPPLIER_COMPLIANCE_FLAGS, 1, rng),

            approved_status: synth::pick(ApprovalStatus::ALL, rng),
            contracts: vec![synth::contract_ref(rng)],
            terms_version: synth::terms_version(rng),

            geo_coords: synth::geo_coords(rng),

            data_source: SYNTHETIC_DATA_SOURCE.to_string(),
            source_timestamp: now - Duration::hours(rng.random_range(1..=72)),
            ingestion_timestamp: now,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Build one part for `tenant_id`, sourcing from `candidate_supplier_ids`.
    ///
    /// With a non-empty pool the default supplier is drawn from it and heads
    /// the qualified list; a second, distinct supplier is added when the
    /// pool offers one. An empty pool leaves both fields empty.
    pub fn build_part(&mut self, tenant_id: &str, candidate_supplier_ids: &[String]) -> Part {
        let now = self.now();
        let part_id = self.ids.next_id(now, &mut self.rng).to_string();
        let rng: &mut dyn RngCore = &mut self.rng;

        let (default_supplier_id, qualified_supplier_ids) =
            pick_suppliers(candidate_supplier_ids, rng);

        Part {
            part_id,
            tenant_id: tenant_id.to_string(),
            part_number: synth::part_number(rng),

            description: synth::description(rng),
            category: synth::pick(PartCategory::ALL, rng),
            lifecycle_status: synth::pick(LifecycleStatus::ALL, rng),
            uom: synth::pick_text(synth::UNITS_OF_MEASURE, rng),
            spec_hash: synth::spec_hash(rng),
            bom_compatibility: synth::bom_compatibility(rng),

            default_supplier_id,
            qualified_supplier_ids,

            unit_cost: synth::unit_cost(rng),
            moq: rng.random_range(1..=500),
            lead_time_days_avg: rng.random_range(2..=60),
            lead_time_days_p95: rng.random_range(5..=90),

            quality_grade: synth::pick(QualityGrade::ALL, rng),
            compliance_flags: synth::pick_subset(synth::PART_COMPLIANCE_FLAGS, 0, rng),
            hazard_class: pick_hazard(rng),

            last_price_change: now,
            data_source: SYNTHETIC_DATA_SOURCE.to_string(),
            source_timestamp: now - Duration::hours(rng.random_range(1..=72)),
            ingestion_timestamp: now,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

fn pick_suppliers(candidates: &[String], rng: &mut dyn RngCore) -> (Option<String>, Vec<String>) {
    if candidates.is_empty() {
        return (None, Vec::new());
    }

    let default_id = candidates[rng.random_range(0..candidates.len())].clone();
    let mut qualified = vec![default_id.clone()];

    let others: Vec<&String> = candidates.iter().filter(|id| **id != default_id).collect();
    if !others.is_empty() {
        let second = others[rng.random_range(0..others.len())];
        qualified.push(second.clone());
    }

    (Some(default_id), qualified)
}

/// Non-hazardous parts are as likely as any single hazard class.
fn pick_hazard(rng: &mut dyn RngCore) -> Option<HazardClass> {
    let idx = rng.random_range(0..=HazardClass::ALL.len());
    HazardClass::ALL.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_options(seed: u64) -> GenerateOptions {
        GenerateOptions::seeded(seed)
            .with_reference_time(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn supplier_fields_stay_in_their_domains() {
        let mut generator = RecordGenerator::new(&fixed_options(1));
        for _ in 0..200 {
            let supplier = generator.build_supplier("tenant_acme");
            assert_eq!(supplier.tenant_id, "tenant_acme");
            assert!(!supplier.supplier_id.is_empty());
            assert!(synth::COUNTRIES.contains(&supplier.country.as_str()));
            assert!(synth::REGIONS.contains(&supplier.region.as_str()));
            assert!((3..=90).contains(&supplier.lead_time_days_avg));
            assert!((0.0..=100.0).contains(&supplier.on_time_delivery_rate));
            let offset = supplier.risk_score - (100.0 - supplier.on_time_delivery_rate);
            assert!((0.0..synth::RISK_JITTER_MAX).contains(&offset));
            assert!(supplier.source_timestamp < supplier.ingestion_timestamp);
            if let Some(geo) = supplier.geo_coords {
                assert!((-90.0..=90.0).contains(&geo.lat));
                assert!((-180.0..=180.0).contains(&geo.lon));
            }
        }
    }

    #[test]
    fn part_without_pool_has_no_suppliers() {
        let mut generator = RecordGenerator::new(&fixed_options(2));
        let part = generator.build_part("tenant_acme", &[]);
        assert_eq!(part.default_supplier_id, None);
        assert!(part.qualified_supplier_ids.is_empty());
    }

    #[test]
    fn single_candidate_is_default_and_only_qualified() {
        let mut generator = RecordGenerator::new(&fixed_options(3));
        let pool = vec!["sup1".to_string()];
        let part = generator.build_part("tenant_acme", &pool);
        assert_eq!(part.default_supplier_id.as_deref(), Some("sup1"));
        assert_eq!(part.qualified_supplier_ids, vec!["sup1".to_string()]);
    }

    #[test]
    fn second_qualified_supplier_is_distinct() {
        let mut generator = RecordGenerator::new(&fixed_options(4));
        let pool: Vec<String> = ["sup1", "sup2", "sup3"].iter().map(|s| s.to_string()).collect();
        for _ in 0..100 {
            let part = generator.build_part("tenant_acme", &pool);
            let default_id = part.default_supplier_id.clone().unwrap();
            assert!(pool.contains(&default_id));
            assert_eq!(part.qualified_supplier_ids.len(), 2);
            assert_eq!(part.qualified_supplier_ids[0], default_id);
            assert_ne!(part.qualified_supplier_ids[1], default_id);
        }
    }

    #[test]
    fn same_seed_and_clock_reproduce_records() {
        let mut left = RecordGenerator::new(&fixed_options(42));
        let mut right = RecordGenerator::new(&fixed_options(42));
        assert_eq!(left.build_supplier("t"), right.build_supplier("t"));
        assert_eq!(left.build_part("t", &[]), right.build_part("t", &[]));
    }

    #[test]
    fn minted_ids_continue_the_record_sequence() {
        let mut generator = RecordGenerator::new(&fixed_options(5));
        let supplier = generator.build_supplier("t");
        let minted = generator.next_id();
        assert!(minted > supplier.supplier_id);
        assert_eq!(generator.next_supplier_code().len(), supplier.supplier_code.len());
    }
}
