//! Skill Store
//!
//! Read-only, in-memory catalog of skills. Loaded once at startup from the
//! embedded catalog or a TOML/JSON file and never mutated afterwards.

use super::types::{Skill, SkillValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog shipped with the binary
pub const BUILTIN_CATALOG: &str = include_str!("../../data/skills.toml");

/// On-disk catalog layout (`[[skills]]` in TOML, `{"skills": [...]}` in JSON)
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub skills: Vec<Skill>,
}

/// Store loading errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    Validation(#[from] SkillValidationError),
}

/// Immutable skill catalog with slug/name indexes
#[derive(Debug, Clone)]
pub struct SkillStore {
    skills: Vec<Skill>,
    by_slug: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl SkillStore {
    /// Build a store, validating every record and id/slug uniqueness
    pub fn new(skills: Vec<Skill>) -> Result<Self, StoreError> {
        let mut by_slug = HashMap::with_capacity(skills.len());
        let mut by_name = HashMap::with_capacity(skills.len());
        let mut ids = HashSet::with_capacity(skills.len());

        for (idx, skill) in skills.iter().enumerate() {
            skill.validate()?;

            if !ids.insert(skill.id.clone()) {
                return Err(SkillValidationError::DuplicateId(skill.id.clone()).into());
            }
            if by_slug.insert(skill.slug.clone(), idx).is_some() {
                return Err(SkillValidationError::DuplicateSlug(skill.slug.clone()).into());
            }
            // First occurrence wins for name lookups
            by_name.entry(skill.name.clone()).or_insert(idx);
        }

        debug!("Indexed {} skills", skills.len());

        Ok(Self {
            skills,
            by_slug,
            by_name,
        })
    }

    /// Empty store
    pub fn empty() -> Self {
        Self {
            skills: Vec::new(),
            by_slug: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Load the catalog embedded at compile time
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a TOML catalog
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        let catalog: CatalogFile = toml::from_str(content)?;
        Self::new(catalog.skills)
    }

    /// Parse a JSON catalog
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        let catalog: CatalogFile = serde_json::from_str(content)?;
        Self::new(catalog.skills)
    }

    /// Load a catalog file, picking the format from the extension
    pub async fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let store = match extension {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => {
                // Try TOML first, then JSON
                match Self::from_toml_str(&content) {
                    Ok(store) => store,
                    Err(StoreError::Toml(_)) => Self::from_json_str(&content)?,
                    Err(e) => return Err(e),
                }
            }
        };

        info!("Loaded {} skills from {}", store.len(), path.display());
        Ok(store)
    }

    /// All skills in catalog order
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Look up a skill by slug (detail routes)
    pub fn get_by_slug(&self, slug: &str) -> Option<&Skill> {
        self.by_slug.get(slug).map(|&idx| &self.skills[idx])
    }

    /// Look up a skill by display name (related-skill references)
    pub fn get_by_name(&self, name: &str) -> Option<&Skill> {
        self.by_name.get(name).map(|&idx| &self.skills[idx])
    }

    /// Slugs of every skill, one route each
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.slug.as_str())
    }
}

impl<'a> IntoIterator for &'a SkillStore {
    type Item = &'a Skill;
    type IntoIter = std::slice::Iter<'a, Skill>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
