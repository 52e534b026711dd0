//! File-backed corpus: noise words, document lists and document tokens.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    inverted_index::{build_index, MasterIndex},
};

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::IO(e),
    })
}

/// Whitespace separated noise words, one or more per line.
pub fn read_noise_words(path: &Path) -> Result<HashSet<String>> {
    Ok(read_source(path)?
        .split_whitespace()
        .map(str::to_lowercase)
        .collect())
}

/// Documents to index: every file under `path` when it is a directory,
/// otherwise the file names listed in it.
pub fn read_document_list(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        return WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter(|entry| entry.as_ref().map_or(true, |e| e.file_type().is_file()))
            .map(|entry| -> Result<PathBuf> { Ok(entry?.into_path()) })
            .collect();
    }

    Ok(read_source(path)?
        .split_whitespace()
        .map(PathBuf::from)
        .collect())
}

/// Raw whitespace separated tokens of one document.
pub fn read_document(path: &Path) -> Result<Vec<String>> {
    Ok(read_source(path)?
        .split_whitespace()
        .map(String::from)
        .collect())
}

/// Loads the noise words and every listed document, then builds the index.
/// Documents are identified by their path as listed.
pub fn make_index(docs: &Path, noise_words: &Path) -> Result<MasterIndex> {
    let noise_words = read_noise_words(noise_words)?;
    let documents = read_document_list(docs)?
        .into_iter()
        .map(|path| -> Result<(String, Vec<String>)> {
            let tokens = read_document(&path)?;
            Ok((path.display().to_string(), tokens))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        documents = documents.len(),
        noise_words = noise_words.len(),
        "loaded corpus"
    );

    let index = build_index(documents, noise_words);

    tracing::info!(keywords = index.len(), "built index");

    Ok(index)
}
