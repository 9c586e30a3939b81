//! Test helpers for writing snapshot files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use potluck_core::test_support::repeated_records;
use potluck_core::{Snapshot, VoteRecord, VoteType};
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding snapshot files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Serialise `snapshot` to `name` and return its path.
    pub(super) fn write_snapshot(&self, name: &str, snapshot: &Snapshot) -> Utf8PathBuf {
        let payload = serde_json::to_vec(snapshot).expect("serialise snapshot");
        let path = self.path(name);
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Six gimbap, two tteokbokki with three likes, one sundae with a dislike.
pub(super) fn lunch_snapshot() -> Snapshot {
    let mut recommendations = repeated_records("김밥", 6, "a");
    recommendations.extend(repeated_records("떡볶이", 2, "b"));
    recommendations.extend(repeated_records("순대", 1, "c"));
    let votes = vec![
        VoteRecord::new("떡볶이", "v1", VoteType::Like),
        VoteRecord::new("떡볶이", "v2", VoteType::Like),
        VoteRecord::new("떡볶이", "v3", VoteType::Like),
        VoteRecord::new("순대", "v1", VoteType::Dislike),
    ];
    Snapshot {
        recommendations,
        votes,
    }
}
