//! Flat-text correction tables, loaded once at construction.
//!
//! A partially loaded table produces silently wrong corrections, so any
//! missing or malformed required file is a fatal [`ResourceError`] at load
//! time. After loading, all tables are immutable and safely shareable.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use smol_str::SmolStr;
use thiserror::Error;

/// Fatal resource-loading failure.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file could not be read at all.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line did not match the expected whitespace-delimited shape.
    #[error("{path}:{line}: malformed entry: {text:?}")]
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The rejected line.
        text: String,
    },
}

/// The correction tables consumed by the forced-rule stage and the candidate
/// generator. `context_list` and `vocabulary` are optional: when absent, the
/// context-based and trie-based candidate sources are simply disabled.
#[derive(Debug, Clone, Default)]
pub struct CheckerResources {
    /// Surface bigram ("left right") → merged surface form.
    pub merged_words: HashMap<SmolStr, SmolStr>,
    /// Surface form → space-separated two-word replacement.
    pub split_words: HashMap<SmolStr, SmolStr>,
    /// Root → neighbor surface forms observed next to it in training text.
    pub context_list: Option<HashMap<SmolStr, Vec<SmolStr>>>,
    /// Closed vocabulary for the trie-guided search.
    pub vocabulary: Option<Vec<SmolStr>>,
}

impl CheckerResources {
    /// Empty tables; every rule that consults them falls through.
    pub fn new() -> CheckerResources {
        CheckerResources::default()
    }

    /// Loads `merged_words.txt` and `split_words.txt` (required) plus
    /// `context_list.txt` and `vocabulary.txt` (optional) from `dir`.
    ///
    /// When `domain` is given, a file named `<stem>_<domain>.txt` is
    /// preferred over `<stem>.txt` if it exists.
    pub fn from_dir(dir: &Path, domain: Option<&str>) -> Result<CheckerResources, ResourceError> {
        let mut resources = CheckerResources::new();

        let merged_path = resolve(dir, "merged_words", domain);
        for (lineno, line) in read_lines(&merged_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(first), Some(second), Some(merged), None) => {
                    resources
                        .merged_words
                        .insert(SmolStr::from(format!("{} {}", first, second)), merged.into());
                }
                _ => return Err(malformed(merged_path, lineno, line)),
            }
        }

        let split_path = resolve(dir, "split_words", domain);
        for (lineno, line) in read_lines(&split_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(first), Some(second), None) => {
                    resources
                        .split_words
                        .insert(word.into(), SmolStr::from(format!("{} {}", first, second)));
                }
                _ => return Err(malformed(split_path, lineno, line)),
            }
        }

        let context_path = resolve(dir, "context_list", domain);
        if context_path.exists() {
            let mut table: HashMap<SmolStr, Vec<SmolStr>> = HashMap::new();
            for (lineno, line) in read_lines(&context_path)? {
                let (root, rest) = line
                    .split_once('\t')
                    .ok_or_else(|| malformed(context_path.clone(), lineno, line.clone()))?;
                let words: Vec<SmolStr> = rest.split_whitespace().map(Into::into).collect();
                if root.is_empty() || words.is_empty() {
                    return Err(malformed(context_path.clone(), lineno, line.clone()));
                }
                table.entry(root.into()).or_default().extend(words);
            }
            resources.context_list = Some(table);
        }

        let vocabulary_path = resolve(dir, "vocabulary", domain);
        if vocabulary_path.exists() {
            let words = read_lines(&vocabulary_path)?
                .into_iter()
                .map(|(_, line)| SmolStr::from(line.trim()))
                .filter(|word| !word.is_empty())
                .collect();
            resources.vocabulary = Some(words);
        }

        Ok(resources)
    }
}

fn malformed(path: PathBuf, line: usize, text: String) -> ResourceError {
    ResourceError::Malformed { path, line, text }
}

fn resolve(dir: &Path, stem: &str, domain: Option<&str>) -> PathBuf {
    if let Some(domain) = domain {
        let tagged = dir.join(format!("{}_{}.txt", stem, domain));
        if tagged.exists() {
            return tagged;
        }
    }
    dir.join(format!("{}.txt", stem))
}

/// Reads non-empty lines with their 1-based line numbers.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, ResourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect())
}
