//! Fragment enumeration
//!
//! Walks the source root, picks out fragment files and reads them. The
//! result is sorted by path relative to the root, so traversal order never
//! leaks into the output. Any unreadable fragment aborts the whole read;
//! callers never see a partial set.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::FRAGMENT_SUFFIX;
use crate::domain::entities::SourceFragment;
use crate::domain::ports::FileSystem;
use crate::error::{BundleError, BundleResult};

/// True for file names ending in the fragment suffix (`.ts`, `.d.ts`)
pub fn is_fragment_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(FRAGMENT_SUFFIX) && n.len() > FRAGMENT_SUFFIX.len())
        .unwrap_or(false)
}

/// Reads every fragment under a source root
pub struct FragmentReader<F: FileSystem> {
    fs: F,
    root: PathBuf,
    exclude: Option<PathBuf>,
}

impl<F: FileSystem> FragmentReader<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            exclude: None,
        }
    }

    /// Never treat `path` as a fragment (used for the destination file)
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate fragment paths, sorted relative to the root
    pub fn discover(&self) -> BundleResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(BundleError::SourceNotFound {
                path: self.root.clone(),
            });
        }

        let excluded = self.exclude.as_deref().and_then(|p| p.canonicalize().ok());

        let mut walker = WalkBuilder::new(&self.root);
        // Every file counts, regardless of .gitignore; only dotfiles are skipped.
        // Symlinked fragments and directories are followed; a link cycle is a walk error.
        walker.standard_filters(false).hidden(true).follow_links(true);

        let mut paths = Vec::new();
        for entry in walker.build() {
            let entry = entry.map_err(|e| BundleError::SourceWalk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;

            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file || !is_fragment_path(entry.path()) {
                continue;
            }

            if let Some(excluded) = &excluded {
                if entry.path().canonicalize().ok().as_ref() == Some(excluded) {
                    continue;
                }
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();
            paths.push(relative);
        }

        paths.sort();
        Ok(paths)
    }

    /// Read all fragments in sorted order
    pub fn read_all(&self) -> BundleResult<Vec<SourceFragment>> {
        self.discover()?
            .into_iter()
            .map(|relative| {
                let full = self.root.join(&relative);
                self.fs
                    .read(&full)
                    .map(|text| SourceFragment::new(relative, text))
                    .map_err(|source| BundleError::FragmentRead { path: full, source })
            })
            .collect()
    }
}
