//! Directory-backed content store
//!
//! Every zettel lives in `<dir>/<id>.zettel.json` as serialized [`Zettel`].
//! Raw content such as images or stylesheets lives in any other file named
//! `<dir>/<id>.<ext>`. The children of a table of contents are the zettel
//! linked from its list items, in list order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use zetteldeck_ast::{walk_blocks, Block, Inline, Visitor, Zettel, ZettelId};
use zetteldeck_core::{ContentStore, StoreError};

const ZETTEL_SUFFIX: &str = ".zettel.json";

/// Zettel stored as files in one directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the serialized zettel `id`
    pub fn zettel_path(&self, id: ZettelId) -> PathBuf {
        self.root.join(format!("{id}{ZETTEL_SUFFIX}"))
    }

    /// Store a zettel, replacing an existing one
    pub fn save(&self, zettel: &Zettel) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(zettel)
            .map_err(|e| StoreError::malformed(zettel.id, e.to_string()))?;
        fs::write(self.zettel_path(zettel.id), json)?;
        Ok(())
    }

    /// Identifiers of all stored zettel, in ascending order
    pub fn zettel_ids(&self) -> Result<Vec<ZettelId>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(ZETTEL_SUFFIX)) else {
                continue;
            };
            match ZettelId::parse(stem) {
                Ok(id) => ids.push(id),
                Err(e) => debug!("Ignoring {}: {}", entry.path().display(), e),
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// First file `<id>.<ext>` that is not the serialized zettel
    fn content_path(&self, id: ZettelId) -> Result<Option<PathBuf>, StoreError> {
        let prefix = format!("{id}.");
        let mut candidates: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(&prefix) && !name.ends_with(ZETTEL_SUFFIX) {
                candidates.push(entry.path());
            }
        }
        candidates.sort();
        Ok(candidates.into_iter().next())
    }
}

impl ContentStore for DirStore {
    fn fetch_zettel(&self, id: ZettelId) -> Result<Zettel, StoreError> {
        let path = self.zettel_path(id);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound { id }),
            Err(e) => return Err(e.into()),
        };
        let zettel: Zettel =
            serde_json::from_str(&json).map_err(|e| StoreError::malformed(id, e.to_string()))?;
        if zettel.id != id {
            return Err(StoreError::malformed(
                id,
                format!("file contains zettel {}", zettel.id),
            ));
        }
        debug!("Read zettel {} from {}", id, path.display());
        Ok(zettel)
    }

    fn fetch_content(&self, id: ZettelId) -> Result<Vec<u8>, StoreError> {
        match self.content_path(id)? {
            Some(path) => Ok(fs::read(path)?),
            None => Err(StoreError::NotFound { id }),
        }
    }

    fn list_children(&self, id: ZettelId) -> Result<Vec<ZettelId>, StoreError> {
        let zettel = self.fetch_zettel(id)?;
        let mut items = ListItemLinks::default();
        walk_blocks(&mut items, &zettel.content);
        Ok(items.ids)
    }
}

/// Zettel linked from list items, repeats included
#[derive(Default)]
struct ListItemLinks {
    ids: Vec<ZettelId>,
    /// Nested lists still to be visited whose links are already collected
    covered: usize,
}

impl Visitor for ListItemLinks {
    fn visit_block(&mut self, block: &Block) {
        if let Block::List(list) = block {
            if self.covered > 0 {
                self.covered -= 1;
                return;
            }
            let mut links = ZettelLinks::default();
            for item in &list.items {
                walk_blocks(&mut links, item);
            }
            self.ids.extend(links.ids);
            self.covered = links.lists;
        }
    }
}

#[derive(Default)]
struct ZettelLinks {
    ids: Vec<ZettelId>,
    lists: usize,
}

impl Visitor for ZettelLinks {
    fn visit_block(&mut self, block: &Block) {
        if matches!(block, Block::List(_)) {
            self.lists += 1;
        }
    }

    fn visit_inline(&mut self, inline: &Inline) {
        if let Inline::Link(link) = inline {
            if let Some(id) = link.reference.zettel_id() {
                self.ids.push(id);
            }
        }
    }
}
