use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// List the `*.db` files directly inside `dir`, sorted by file name.
///
/// A missing directory means Live was never run for this user; that is
/// still worth a report, so it yields an empty list instead of an error.
pub fn discover_databases(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::warn!("database directory {} does not exist", dir.display());
        return Vec::new();
    }

    let dbs: Vec<PathBuf> = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry in {}: {err}", dir.display());
                None
            }
        })
        .filter(|entry| entry.depth() == 1)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "db"))
        .collect();

    tracing::info!("found {} databases in {}", dbs.len(), dir.display());
    dbs
}
