//! Board persistence.
//!
//! Posts live in a single JSON file as an array of objects with
//! `content`, `x`, `y`, `width` and `height`. Every save rewrites the whole
//! file; there are no incremental writes and a crash mid-write can leave a
//! truncated file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::board::Post;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed board file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode posts: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Load posts from `path`, filling in default geometry for missing fields.
///
/// A missing file is an empty board, not an error.
pub fn load(path: &Path) -> StoreResult<Vec<Post>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut posts: Vec<Post> =
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    for post in &mut posts {
        post.normalize();
    }
    Ok(posts)
}

/// Overwrite `path` with the full post list, pretty-printed with four-space indents.
pub fn save<'a, I>(path: &Path, posts: I) -> StoreResult<()>
where
    I: IntoIterator<Item = &'a Post>,
{
    let posts: Vec<&Post> = posts.into_iter().collect();
    let encoded = encode(&posts)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, encoded).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn encode(posts: &[&Post]) -> StoreResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    posts
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;
    Ok(buffer)
}
