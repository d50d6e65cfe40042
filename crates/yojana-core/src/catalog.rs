//! Scheme catalog domain model.
//!
//! The catalog is the read-only reference dataset of government welfare
//! schemes, supplied once at startup and shared across all sessions.

use crate::error::{Result, YojanaError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single government welfare scheme record.
///
/// All fields are plain descriptive text. Records are immutable once the
/// catalog has been constructed; `name` is unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// Official scheme name (unique within the catalog)
    pub name: String,
    /// Short description of what the scheme provides
    pub description: String,
    /// Who qualifies for the scheme
    pub eligibility: String,
    /// What beneficiaries receive
    pub benefits: String,
    /// How to apply
    pub application_process: String,
    /// Documents needed when applying
    pub required_documents: String,
    /// State the scheme belongs to (e.g. "Tamil Nadu")
    pub state: String,
    /// Topical domain (e.g. "Health", "Women Welfare")
    pub domain: String,
    /// Official website URL
    pub official_website: String,
}

/// The immutable collection of scheme records.
///
/// Constructed once at startup and never mutated afterwards, so it can be
/// shared between sessions without locking (typically behind an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeRecord>,
}

impl SchemeCatalog {
    /// Creates a catalog from a list of records.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if two records share the same name, since
    /// scheme names act as stable references from session state.
    pub fn new(schemes: Vec<SchemeRecord>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for scheme in &schemes {
            if !seen.insert(scheme.name.as_str()) {
                return Err(YojanaError::config(format!(
                    "duplicate scheme name in catalog: '{}'",
                    scheme.name
                )));
            }
        }
        Ok(Self { schemes })
    }

    /// Returns all records in catalog declaration order.
    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    /// Looks up a record by its unique name.
    pub fn get(&self, name: &str) -> Option<&SchemeRecord> {
        self.schemes.iter().find(|s| s.name == name)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Returns the sorted, de-duplicated list of states covered by the catalog.
    pub fn states(&self) -> Vec<String> {
        let states: BTreeSet<&str> = self.schemes.iter().map(|s| s.state.as_str()).collect();
        states.into_iter().map(str::to_string).collect()
    }

    /// Returns the sorted, de-duplicated list of domains covered by the catalog.
    pub fn domains(&self) -> Vec<String> {
        let domains: BTreeSet<&str> = self.schemes.iter().map(|s| s.domain.as_str()).collect();
        domains.into_iter().map(str::to_string).collect()
    }

    /// Filters records by exact state/domain (case-insensitive) and by a
    /// keyword matched as a substring of name, description, or domain.
    ///
    /// This is a plain filter for catalog browsing; ranked free-text search
    /// lives in the ranker module.
    pub fn search(
        &self,
        state: Option<&str>,
        domain: Option<&str>,
        keyword: Option<&str>,
    ) -> Vec<&SchemeRecord> {
        self.schemes
            .iter()
            .filter(|s| state.is_none_or(|st| s.state.eq_ignore_ascii_case(st)))
            .filter(|s| domain.is_none_or(|d| s.domain.eq_ignore_ascii_case(d)))
            .filter(|s| {
                keyword.is_none_or(|kw| {
                    let kw = kw.to_lowercase();
                    s.name.to_lowercase().contains(&kw)
                        || s.description.to_lowercase().contains(&kw)
                        || s.domain.to_lowercase().contains(&kw)
                })
            })
            .collect()
    }
}
