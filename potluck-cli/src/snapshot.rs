//! Snapshot source backed by a JSON file on disk.

use std::io::BufReader;

use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs_utf8};
use potluck_core::{Snapshot, SnapshotError, SnapshotSource};

/// Reads `{ "recommendations": [...], "votes": [...] }` from a file.
///
/// A file that cannot be opened is [`SnapshotError::Unavailable`]; a file
/// that opens but does not decode is [`SnapshotError::Malformed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JsonFileSnapshot {
    path: Utf8PathBuf,
}

impl JsonFileSnapshot {
    pub(crate) fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonFileSnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let file = fs_utf8::File::open_ambient(&self.path, ambient_authority())
            .map_err(|source| SnapshotError::unavailable(self.path.as_str(), source))?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| SnapshotError::malformed(self.path.as_str(), source))?;
        log::debug!(
            "read {} recommendations and {} votes from {}",
            snapshot.recommendations.len(),
            snapshot.votes.len(),
            self.path
        );
        Ok(snapshot)
    }
}
