use std::collections::HashSet;

use crate::csnades::schema::NadeSummary;

/// Drops records whose (type, slug) key has already been seen, keeping the
/// first occurrence and the relative order of the survivors.
pub fn dedupe_nades(mut records: Vec<NadeSummary>) -> Vec<NadeSummary> {
    let mut seen = HashSet::new();
    records.retain(|record| seen.insert(record.natural_key()));
    records
}
