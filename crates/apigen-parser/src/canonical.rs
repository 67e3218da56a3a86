//! Canonical ordering and unique naming
//!
//! Generated code depends on both the order and the names produced here,
//! so neither may depend on input order, hashing or host locale.

use crate::model::MethodModel;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use tracing::warn;

/// Sort `models` and assign every model a unique name
pub fn canonicalize(mut models: Vec<MethodModel>) -> Vec<MethodModel> {
    // Stable: fully equal models keep their relative order
    models.sort_by(compare_models);

    for pair in models.windows(2) {
        if compare_models(&pair[0], &pair[1]) == Ordering::Equal {
            warn!("Duplicate methods found [{}], [{}]", pair[0], pair[1]);
        }
    }

    assign_unique_names(&mut models);
    models
}

/// Order by name, then argument count, then argument names position by position
pub fn compare_models(a: &MethodModel, b: &MethodModel) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| a.arguments().len().cmp(&b.arguments().len()))
        .then_with(|| {
            a.arguments()
                .iter()
                .map(|arg| arg.name())
                .cmp(b.arguments().iter().map(|arg| arg.name()))
        })
}

/// Upper-case base identifier for a method name
///
/// Maps one character at a time with Unicode case mapping, so the
/// result never depends on the host locale. A character whose upper case
/// expands to several characters (`ß`) is kept as is.
pub fn base_identifier(name: &str) -> String {
    name.chars().map(upper_case_char).collect()
}

fn upper_case_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Name models in their current order
///
/// The first model with a given base identifier gets it verbatim; the n-th
/// later one gets `BASE_n`. A candidate already taken by another model in
/// the batch is skipped by bumping the suffix.
fn assign_unique_names(models: &mut [MethodModel]) {
    let mut occurrences: FxHashMap<String, usize> = FxHashMap::default();
    let mut taken: FxHashSet<String> = FxHashSet::default();

    for model in models.iter_mut() {
        let base = base_identifier(model.name());
        let seen = occurrences.entry(base.clone()).or_insert(0);

        let mut unique = if *seen == 0 {
            base.clone()
        } else {
            format!("{}_{}", base, seen)
        };
        while taken.contains(&unique) {
            *seen += 1;
            unique = format!("{}_{}", base, seen);
        }
        *seen += 1;

        taken.insert(unique.clone());
        model.set_unique_name(unique);
    }
}
