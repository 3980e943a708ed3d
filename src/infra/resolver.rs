// ============================================================
// Layer 6 — Caching Path Resolver
// ============================================================
// Corpus paths may be local files or http(s) URLs. The reader
// delegates resolution to this component:
//
//   local path → verified to exist, returned unchanged
//   remote URL → mapped to a deterministic filename inside the
//                cache directory; returned if present there
//
// The cache slot name is <hash>-<last-url-segment>, so the
// same URL always resolves to the same file and the original
// filename stays readable in the cache listing.
//
// This resolver does NOT download. Fetching a corpus is a
// separate, external step; when the cached copy is missing the
// resolver fails with the exact path to place it at. That
// keeps this crate free of network code while preserving the
// resolve(path) -> local_path contract the reader relies on.

use anyhow::{bail, Context, Result};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::domain::traits::PathResolver;

/// Resolves corpus paths, looking remote URLs up in a local
/// cache directory.
pub struct CachingResolver {
    cache_dir: PathBuf,
}

impl CachingResolver {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self { cache_dir: cache_dir.into() }
    }

    /// The cache slot a URL maps to, whether or not it exists
    pub fn cache_slot(&self, url: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        url.hash(&mut hasher);

        // Keep the last URL segment for human readability
        let segment = url
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or("corpus");

        self.cache_dir.join(format!("{:016x}-{}", hasher.finish(), segment))
    }

    fn is_remote(path: &str) -> bool {
        path.starts_with("http://") || path.starts_with("https://")
    }
}

impl Default for CachingResolver {
    /// Cache under the system temp directory. Override with
    /// new() / --cache-dir for a persistent location.
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("nli_corpus_cache"))
    }
}

impl PathResolver for CachingResolver {
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        if Self::is_remote(path) {
            let slot = self.cache_slot(path);
            if slot.exists() {
                tracing::debug!("cache hit: {} -> {}", path, slot.display());
                return Ok(slot);
            }
            bail!(
                "Remote corpus '{}' is not cached. Download it to '{}' first.",
                path,
                slot.display()
            );
        }

        let local = Path::new(path);
        if !local.exists() {
            bail!("Corpus file '{}' does not exist", path);
        }
        Ok(local.to_path_buf())
    }
}

/// Copy a downloaded corpus into the cache slot for its URL.
/// Convenience for pre-populating the cache by hand or from
/// test fixtures.
pub fn populate_cache(resolver: &CachingResolver, url: &str, source: &Path) -> Result<PathBuf> {
    let slot = resolver.cache_slot(url);
    if let Some(parent) = slot.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create cache directory '{}'", parent.display()))?;
    }
    std::fs::copy(source, &slot)
        .with_context(|| format!("Cannot copy '{}' into cache", source.display()))?;
    Ok(slot)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("nli_corpus_resolver_{}_{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_local_path_passes_through() {
        let dir  = scratch("local");
        let file = dir.join("corpus.jsonl");
        std::fs::write(&file, "{}").unwrap();

        let resolver = CachingResolver::new(&dir);
        assert_eq!(resolver.resolve(file.to_str().unwrap()).unwrap(), file);
    }

    #[test]
    fn test_missing_local_path_errors() {
        let resolver = CachingResolver::new(scratch("missing"));
        assert!(resolver.resolve("/no/such/file.jsonl").is_err());
    }

    #[test]
    fn test_url_resolves_deterministically() {
        let resolver = CachingResolver::new(scratch("determinism"));
        let url      = "https://example.org/data/multinli_1.0_dev.jsonl";
        assert_eq!(resolver.cache_slot(url), resolver.cache_slot(url));

        let name = resolver.cache_slot(url);
        let name = name.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("multinli_1.0_dev.jsonl"));
    }

    #[test]
    fn test_uncached_url_errors_with_slot_path() {
        let dir      = scratch("uncached");
        let resolver = CachingResolver::new(&dir);
        let err = resolver
            .resolve("https://example.org/xnli.dev.jsonl")
            .unwrap_err();
        assert!(err.to_string().contains("not cached"));
    }

    #[test]
    fn test_populated_cache_resolves() {
        let dir    = scratch("populated");
        let source = dir.join("downloaded.jsonl");
        std::fs::write(&source, "row").unwrap();

        let resolver = CachingResolver::new(dir.join("cache"));
        let url      = "https://example.org/xnli.test.jsonl";
        let slot     = populate_cache(&resolver, url, &source).unwrap();

        assert_eq!(resolver.resolve(url).unwrap(), slot);
        assert_eq!(std::fs::read_to_string(slot).unwrap(), "row");
    }
}
