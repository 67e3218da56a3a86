//! Post-processing hook
//!
//! Runs once per parse, after every signature is bound and before the
//! argument consistency check. A processor may add, remove or reorder
//! models, e.g. to synthesize paged variants of a real method.

use crate::model::MethodModel;

/// Transform applied to the bound, unsorted batch
pub trait ResultProcessor {
    /// Return the batch to validate and canonicalize
    fn process_results(&self, models: Vec<MethodModel>) -> Vec<MethodModel>;
}

/// Default processor: returns the batch unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ResultProcessor for Identity {
    fn process_results(&self, models: Vec<MethodModel>) -> Vec<MethodModel> {
        models
    }
}

impl<F> ResultProcessor for F
where
    F: Fn(Vec<MethodModel>) -> Vec<MethodModel>,
{
    fn process_results(&self, models: Vec<MethodModel>) -> Vec<MethodModel> {
        self(models)
    }
}
