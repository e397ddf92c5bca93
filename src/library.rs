// SPDX-License-Identifier: MPL-2.0
//! Ordered list of loaded images.
//!
//! Each [`ListEntry`] owns the raster decoded from one file together with its
//! preview and the label shown in the list. Entries are kept in load order and
//! never removed; the label is the 1-based position at which the entry was
//! appended.

use crate::error::Error;
use crate::media::{Raster, RasterDecoder, Thumbnail};
use std::path::{Path, PathBuf};

/// One loaded image.
#[derive(Debug, Clone)]
pub struct ListEntry {
    raster: Raster,
    thumbnail: Thumbnail,
    label: String,
    path: PathBuf,
}

impl ListEntry {
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A file that could not be decoded during a batch load.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of [`ImageList::load_batch`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Indices of the entries appended by this batch, in order.
    pub added: Vec<usize>,
    /// Files that failed to decode, in order.
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.failures.is_empty()
    }
}

/// Progress of a running batch: `done` files processed out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub done: usize,
    pub total: usize,
}

/// The image list model.
#[derive(Debug, Default)]
pub struct ImageList {
    entries: Vec<ListEntry>,
    selected: Option<usize>,
}

impl ImageList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ListEntry> {
        self.entries.get(index)
    }

    /// Index of the entry labelled `label`, if any.
    #[must_use]
    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    /// Marks `index` as the current entry. Out-of-range indices clear the
    /// selection. Returns the new selection.
    pub fn set_selected(&mut self, index: Option<usize>) -> Option<usize> {
        self.selected = index.filter(|&i| i < self.entries.len());
        self.selected
    }

    /// Exclusive access to the selected raster for in-place painting.
    pub fn selected_raster_mut(&mut self) -> Option<&mut Raster> {
        let index = self.selected?;
        self.entries.get_mut(index).map(|entry| &mut entry.raster)
    }

    /// Appends a decoded raster and returns its index.
    pub fn push(&mut self, raster: Raster, path: PathBuf) -> usize {
        let index = self.entries.len();
        let thumbnail = Thumbnail::render(&raster);
        self.entries.push(ListEntry {
            raster,
            thumbnail,
            label: (index + 1).to_string(),
            path,
        });
        index
    }

    /// Regenerates the preview of `index` from its current pixels.
    pub fn refresh_thumbnail(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.thumbnail = Thumbnail::render(&entry.raster);
        }
    }

    /// Decodes `paths` in order and appends every success.
    ///
    /// A failing file is recorded and the batch continues. `progress` is
    /// called after each file, whatever its outcome.
    pub fn load_batch<P, F>(
        &mut self,
        paths: &[P],
        decoder: &dyn RasterDecoder,
        mut progress: F,
    ) -> LoadReport
    where
        P: AsRef<Path>,
        F: FnMut(LoadProgress),
    {
        let mut report = LoadReport::default();
        let total = paths.len();

        for (done, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            match decoder.decode(path) {
                Ok(raster) => {
                    let index = self.push(raster, path.to_path_buf());
                    log::debug!("Loaded {} as entry {}", path.display(), index + 1);
                    report.added.push(index);
                }
                Err(error) => {
                    log::warn!("Cannot load {}: {}", path.display(), error);
                    report.failures.push(LoadFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
            progress(LoadProgress {
                done: done + 1,
                total,
            });
        }

        report
    }
}
