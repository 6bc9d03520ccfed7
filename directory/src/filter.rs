use crate::catalog::load_records;
use crate::search;
use crate::types::FilterSpec;
use crate::types::SupervisorRecord;

/// Records passing the domain, slot and search predicates, in input order.
pub fn filter(records: &[SupervisorRecord], spec: &FilterSpec) -> Vec<SupervisorRecord> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect()
}

/// Like [`filter`] for records that have not been decoded yet. A value that
/// is not an array logs an error and yields nothing.
pub fn filter_json(records: &serde_json::Value, spec: &FilterSpec) -> Vec<SupervisorRecord> {
    filter(&load_records(records), spec)
}

pub fn matches(record: &SupervisorRecord, spec: &FilterSpec) -> bool {
    domain_matches(record, spec.domain.as_deref())
        && slots_match(record, spec.min_slots, spec.max_slots)
        && search::matches(record, &spec.search_query)
}

fn domain_matches(record: &SupervisorRecord, domain: Option<&str>) -> bool {
    match domain {
        None | Some("") => true,
        Some(d) => record
            .research_domain
            .to_lowercase()
            .contains(&d.to_lowercase()),
    }
}

fn slots_match(record: &SupervisorRecord, min: u32, max: Option<u32>) -> bool {
    record.available_slots >= min && max.is_none_or(|max| record.available_slots <= max)
}
