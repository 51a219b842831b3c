//! Role-to-tile lookup table
//!
//! The table is read once per run from a JSON file and never changes
//! afterwards. A missing or unreadable file yields an empty table, which
//! resolves nothing and therefore leaves every cell untouched.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::algorithm::classifier::ShapeRole;
use crate::io::configuration::{GID_DEFAULT_KEY, GID_MAPPER_KEY};
use crate::io::error::{MapperError, Result, file_system_error};
use crate::spatial::grid::TileId;

#[derive(Deserialize)]
struct RoleTableFile {
    #[serde(rename = "tmx_gid_mapper", default)]
    mapper: HashMap<String, TileId>,
    #[serde(rename = "tmx_gid_default", default)]
    default: Option<TileId>,
}

/// Mapping from shape roles to output tile identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTable {
    ids: HashMap<ShapeRole, TileId>,
    default_id: Option<TileId>,
}

impl RoleTable {
    /// Table that resolves nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from explicit entries
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ShapeRole, TileId)>,
        default_id: Option<TileId>,
    ) -> Self {
        Self {
            ids: entries.into_iter().collect(),
            default_id,
        }
    }

    /// Parse the JSON table format
    ///
    /// Keys inside the mapper object that do not name a role are ignored
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns a lookup table error if the text is not valid JSON of the
    /// expected shape
    pub fn from_json_str(path: &Path, text: &str) -> Result<Self> {
        let file: RoleTableFile =
            serde_json::from_str(text).map_err(|e| MapperError::LookupTable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut ids = HashMap::with_capacity(file.mapper.len());
        for (key, id) in file.mapper {
            if let Some(role) = ShapeRole::from_key(&key) {
                ids.insert(role, id);
            } else {
                warn!(
                    "{}: ignoring unknown key '{key}' in '{GID_MAPPER_KEY}'",
                    path.display()
                );
            }
        }

        debug!(
            "{}: {} role ids, {GID_DEFAULT_KEY} = {:?}",
            path.display(),
            ids.len(),
            file.default
        );

        Ok(Self {
            ids,
            default_id: file.default,
        })
    }

    /// Read and parse the table at `path`
    ///
    /// # Errors
    ///
    /// Returns a lookup table error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MapperError::LookupTable {
            path: path.to_path_buf(),
            reason: file_system_error(path, "read", e).to_string(),
        })?;
        Self::from_json_str(path, &text)
    }

    /// Read the table at `path`, degrading to an empty table on failure
    ///
    /// The failure is logged once; mapping then proceeds without any
    /// substitution.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                warn!("{e}; continuing without tile substitution");
                Self::empty()
            }
        }
    }

    /// Tile identifier for `role`
    ///
    /// Falls back to the `tmx_gid_default` entry when the role has no
    /// identifier of its own; `None` means the cell keeps its value.
    pub fn resolve(&self, role: ShapeRole) -> Option<TileId> {
        self.ids.get(&role).copied().or(self.default_id)
    }

    /// Default identifier for roles without their own entry
    pub const fn default_id(&self) -> Option<TileId> {
        self.default_id
    }

    /// Number of roles with an explicit identifier
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Test if the table resolves nothing at all
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.default_id.is_none()
    }
}

/// Resolve `role` through `table`
pub fn resolve(role: ShapeRole, table: &RoleTable) -> Option<TileId> {
    table.resolve(role)
}
