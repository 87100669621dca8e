//! ID pool sampling.
//!
//! Reads known-valid node ids out of an edge-list dataset so that READ and
//! DELETE operations target entities that actually exist. Sampling is
//! advisory: any failure degrades to a fixed fallback pool instead of
//! failing the run.

use log::warn;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default cap on the number of distinct ids kept in the pool.
pub const DEFAULT_SAMPLE_CAP: usize = 5000;

/// Bounded, immutable set of entity identifiers sampled from a dataset.
/// Built once per run and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct IdPool {
    ids: Vec<String>,
}

impl IdPool {
    pub fn new(ids: Vec<String>) -> Self {
        debug_assert!(!ids.is_empty(), "IdPool must never be empty");
        Self { ids }
    }

    /// The guaranteed-nonempty pool used when sampling yields nothing.
    pub fn fallback() -> Self {
        Self {
            ids: vec!["0".to_string(), "1".to_string()],
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }
}

/// Extracts up to `cap` distinct node ids from an edge-list file.
///
/// Lines starting with `%` or `#` are comments. Remaining lines are split on
/// whitespace (commas treated as whitespace) and the first two tokens are
/// taken as the endpoints of a directed edge. Traversal stops at the cap or
/// end of file, so the sample reflects file order rather than a uniform draw
/// over the whole id space.
pub fn sample_ids<P: AsRef<Path>>(path: P, cap: usize) -> IdPool {
    match try_sample(path.as_ref(), cap) {
        Ok(ids) if !ids.is_empty() => IdPool::new(ids),
        Ok(_) => {
            warn!(
                "Dataset {} contained no usable edges, using fallback id pool",
                path.as_ref().display()
            );
            IdPool::fallback()
        }
        Err(e) => {
            warn!(
                "Failed to read dataset {} ({}), using fallback id pool",
                path.as_ref().display(),
                e
            );
            IdPool::fallback()
        }
    }
}

fn try_sample(path: &Path, cap: usize) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('%') || line.starts_with('#') {
            continue;
        }

        let cleaned = line.replace(',', " ");
        let mut tokens = cleaned.split_whitespace();
        let (src, dst) = match (tokens.next(), tokens.next()) {
            (Some(s), Some(d)) => (s, d),
            _ => continue,
        };

        for token in [src, dst] {
            if seen.insert(token.to_string()) {
                ids.push(token.to_string());
            }
        }

        if ids.len() >= cap {
            ids.truncate(cap);
            break;
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temporary dataset");
        file.write_all(content.as_bytes())
            .expect("Failed to write dataset");
        file
    }

    #[test]
    fn test_sample_basic_edge_list() {
        let file = write_dataset("1 2\n3 4\n1 4\n");
        let pool = sample_ids(file.path(), 100);
        assert_eq!(pool.len(), 4);
        for id in ["1", "2", "3", "4"] {
            assert!(pool.contains(id));
        }
    }

    #[test]
    fn test_sample_skips_comments_and_handles_commas() {
        let file = write_dataset("% header comment\n# another\n5,6\n7 8\n");
        let pool = sample_ids(file.path(), 100);
        assert_eq!(pool.len(), 4);
        assert!(pool.contains("5"));
        assert!(pool.contains("8"));
    }

    #[test]
    fn test_sample_respects_cap() {
        let mut content = String::new();
        for i in 0..100 {
            content.push_str(&format!("{} {}\n", i * 2, i * 2 + 1));
        }
        let file = write_dataset(&content);
        let pool = sample_ids(file.path(), 10);
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let pool = sample_ids("/nonexistent/graph.csv", 100);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("0"));
        assert!(pool.contains("1"));
    }

    #[test]
    fn test_empty_file_falls_back() {
        let file = write_dataset("% only a comment\n");
        let pool = sample_ids(file.path(), 100);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_short_lines_skipped() {
        let file = write_dataset("lonely\n9 10\n");
        let pool = sample_ids(file.path(), 100);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("9"));
        assert!(!pool.contains("lonely"));
    }
}
