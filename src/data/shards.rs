// ============================================================
// Layer 4 — XNLI Shard Renamer
// ============================================================
// One-shot migration aid. The XNLI dev/test sets are split
// into 15 shards with split(1), which names its output with
// alphabetic suffixes:
//
//   split xnli.dev.jsonl  xnli.dev.  -a 1 -l 2490
//   split xnli.test.jsonl xnli.test. -a 1 -l 5010
//
// giving xnli.dev.a .. xnli.dev.o. Each position corresponds
// to one of the 15 XNLI languages in a fixed order, so the
// shards are renamed to language-coded filenames:
//
//   xnli.dev.a  → xnli.dev.ar
//   xnli.dev.b  → xnli.dev.bg
//   ...
//   xnli.test.o → xnli.test.zh
//
// Files whose names are not in the table are left untouched.
// A second run finds no matching old names and does nothing —
// idempotent after the first success. If any TARGET name is
// already occupied the run aborts before renaming anything,
// rather than inheriting whatever overwrite behaviour the OS
// rename primitive has.
//
// This is a migration script, not a reusable component: no
// retry, no rollback, no recursion into subdirectories.
//
// Reference: Conneau et al. (2018) - XNLI paper

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The 15 XNLI languages, in shard order: position i holds the
/// language of the shard with the i-th alphabetic suffix.
pub const XNLI_LANGS: [&str; 15] = [
    "ar", "bg", "de", "el", "en", "es", "fr", "hi",
    "ru", "sw", "th", "tr", "ur", "vi", "zh",
];

/// split(1) suffixes for 15 shards with -a 1
const SHARD_SUFFIXES: &str = "abcdefghijklmno";

/// What one run of the renamer did
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameReport {
    /// Files renamed by this run
    pub renamed: usize,

    /// Directory entries that matched no table key
    pub untouched: usize,
}

/// Build the old-name → new-name table: 30 entries, 15 per
/// split, from two parallel ordered sequences.
pub fn rename_table() -> HashMap<String, String> {
    let mut table = HashMap::new();
    for split in ["dev", "test"] {
        for (suffix, lang) in SHARD_SUFFIXES.chars().zip(XNLI_LANGS) {
            table.insert(
                format!("xnli.{split}.{suffix}"),
                format!("xnli.{split}.{lang}"),
            );
        }
    }
    table
}

/// Rename all matching shard files in `dir` (non-recursive).
///
/// Aborts with an error BEFORE any rename if a target filename
/// is already occupied — a directory in that state was either
/// already migrated halfway or holds foreign files, and the OS
/// overwrite semantics in that case are not something to rely on.
pub fn rename_shards(dir: &Path) -> Result<RenameReport> {
    let table = rename_table();

    // ── Pass 1: collect matches and check preconditions ──────────────────────
    let mut pending: Vec<(String, String)> = Vec::new();
    let mut untouched = 0usize;

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            untouched += 1;
            continue;
        };

        match table.get(&name) {
            Some(target) => pending.push((name, target.clone())),
            None => untouched += 1,
        }
    }

    for (old, new) in &pending {
        if dir.join(new).exists() {
            bail!(
                "Refusing to rename '{}': target '{}' already exists in '{}'",
                old,
                new,
                dir.display()
            );
        }
    }

    // ── Pass 2: rename ───────────────────────────────────────────────────────
    for (old, new) in &pending {
        fs::rename(dir.join(old), dir.join(new))
            .with_context(|| format!("Cannot rename '{}' to '{}'", old, new))?;
        tracing::debug!("renamed {} -> {}", old, new);
    }

    tracing::info!(
        "Renamed {} shard file(s) in '{}' ({} other entries untouched)",
        pending.len(),
        dir.display(),
        untouched,
    );

    Ok(RenameReport { renamed: pending.len(), untouched })
}
