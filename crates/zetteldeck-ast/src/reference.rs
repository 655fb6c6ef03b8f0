//! Link and embed references
//!
//! The content store resolves every reference while evaluating a zettel and
//! records how it was resolved as a [`RefState`].

use serde::{Deserialize, Serialize};

use crate::id::ZettelId;

/// Resolution state of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefState {
    /// Reference could not be interpreted
    Invalid,
    /// Reference to another zettel, possibly with a `#fragment`
    Zettel,
    /// Reference to a fragment of the same zettel
    SelfRef,
    /// Zettel reference that the store knows to exist
    Found,
    /// Zettel reference that the store knows to be missing
    Broken,
    /// Path on the same host
    Hosted,
    /// Path relative to the store's base URL
    Based,
    /// Search query
    Query,
    /// Absolute URL outside of the store
    External,
}

/// A reference as found in links and embeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub state: RefState,
    pub value: String,
}

impl Reference {
    pub fn new(state: RefState, value: impl Into<String>) -> Self {
        Self {
            state,
            value: value.into(),
        }
    }

    /// Reference to a zettel
    pub fn zettel(id: ZettelId) -> Self {
        Self::new(RefState::Zettel, id.to_string())
    }

    /// Reference to an external URL
    pub fn external(url: impl Into<String>) -> Self {
        Self::new(RefState::External, url)
    }

    pub fn is_zettel(&self) -> bool {
        self.state == RefState::Zettel
    }

    /// Value without a trailing `#fragment`
    pub fn target(&self) -> &str {
        match self.value.split_once('#') {
            Some((target, _)) => target,
            None => &self.value,
        }
    }

    /// Identifier of the referenced zettel.
    ///
    /// Only zettel references yield an identifier; the fragment is ignored.
    pub fn zettel_id(&self) -> Option<ZettelId> {
        if !self.is_zettel() {
            return None;
        }
        ZettelId::parse(self.target()).ok()
    }
}
