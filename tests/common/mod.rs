#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch web root under the system temp dir, removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "webroot-test-{}-{}",
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> &Self {
        let file = self.path.join(name);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file, contents).unwrap();
        self
    }

    pub fn dir(&self, name: &str) -> &Self {
        fs::create_dir_all(self.path.join(name)).unwrap();
        self
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Splits a directory listing body and sorts it, since the filesystem
/// decides the order.
pub fn sorted_listing(body: &[u8]) -> Vec<String> {
    let mut names: Vec<String> = std::str::from_utf8(body)
        .unwrap()
        .split('\n')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    names.sort();
    names
}

/// Status line of a raw response.
pub fn status_line(raw: &[u8]) -> &str {
    let end = raw
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(raw.len());
    std::str::from_utf8(&raw[..end]).unwrap_or("")
}

/// Everything after the first CRLF CRLF.
pub fn body_of(raw: &[u8]) -> &[u8] {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    &raw[pos + 4..]
}
