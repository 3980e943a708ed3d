// ============================================================
// Layer 2 — RenameUseCase
// ============================================================
// Thin wrapper over the shard renamer: the operation itself is
// a one-shot migration (see data/shards.rs), so the use case
// only carries the target directory and reports the outcome.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::shards::{rename_shards, RenameReport};

pub struct RenameUseCase {
    dir: PathBuf,
}

impl RenameUseCase {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn execute(&self) -> Result<RenameReport> {
        tracing::info!("Renaming XNLI shards in '{}'", self.dir.display());
        rename_shards(&self.dir)
    }
}
