// ============================================================
// Layer 4 — NLI Dataset
// ============================================================
// Wraps eagerly-read records in Burn's Dataset trait so the
// training framework's DataLoader can call .get(index) and
// .len() on them. This is the whole adapter surface into the
// framework — batching, vocabulary building, and the training
// loop itself all live on the framework side.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::data::dataset::Dataset;

use crate::domain::record::NliRecord;

pub struct NliDataset {
    records: Vec<NliRecord>,
}

impl NliDataset {
    pub fn new(records: Vec<NliRecord>) -> Self {
        Self { records }
    }

    /// How many of the records carry a gold label
    pub fn labeled_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_labeled()).count()
    }
}

impl Dataset<NliRecord> for NliDataset {
    fn get(&self, index: usize) -> Option<NliRecord> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
