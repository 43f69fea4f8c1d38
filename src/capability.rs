//! Capability registry: the set of external tools a generated prompt may reference.
//!
//! Built once from a seed list and read-only afterwards. Registration order is
//! preserved because it is the order tools are listed in generated documents.

use serde::Serialize;

pub const FIRECRAWL_SEARCH: &str = "firecrawl_search";
pub const BRAVE_WEB_SEARCH: &str = "brave_web_search";
pub const LOGO_SEARCH: &str = "logo_search";
pub const BYTEROVER_STORE_KNOWLEDGE: &str = "byterover-store-knowledge";
pub const SEQUENTIAL_THINKING: &str = "sequentialthinking";

/// Seed list used when configuration does not supply one.
pub const DEFAULT_CAPABILITIES: [&str; 5] = [
    FIRECRAWL_SEARCH,
    BRAVE_WEB_SEARCH,
    LOGO_SEARCH,
    BYTEROVER_STORE_KNOWLEDGE,
    SEQUENTIAL_THINKING,
];

/// Result of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityInfo {
    pub name: String,
    pub available: bool,
    pub description: String,
    pub hint: String,
}

/// Read-only catalog of available capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityRegistry {
    available: Vec<String>,
}

impl CapabilityRegistry {
    /// Build a registry from a seed list. Blank and repeated names are skipped.
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut available: Vec<String> = Vec::new();
        for name in seed {
            let name = name.into().trim().to_string();
            if name.is_empty() || available.contains(&name) {
                continue;
            }
            available.push(name);
        }
        Self { available }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPABILITIES)
    }

    /// Every available capability, in registration order.
    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.available.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Look up a capability by name.
    ///
    /// Registered names are reported available. Names from the built-in catalog
    /// that were not registered are reported unavailable. Anything else is `None`.
    pub fn lookup(&self, name: &str) -> Option<CapabilityInfo> {
        let available = self.is_available(name);
        let (description, hint) = match catalog_entry(name) {
            Some(entry) => entry,
            None if available => (
                "Externally registered capability",
                "Invoke when the task needs this capability",
            ),
            None => return None,
        };
        Some(CapabilityInfo {
            name: name.to_string(),
            available,
            description: description.to_string(),
            hint: hint.to_string(),
        })
    }

    /// Lookups for every registered capability followed by unregistered catalog entries.
    pub fn describe_all(&self) -> Vec<CapabilityInfo> {
        let catalog_only = DEFAULT_CAPABILITIES
            .iter()
            .filter(|name| !self.is_available(name))
            .map(|name| name.to_string());
        self.available
            .iter()
            .cloned()
            .chain(catalog_only)
            .filter_map(|name| self.lookup(&name))
            .collect()
    }
}

fn catalog_entry(name: &str) -> Option<(&'static str, &'static str)> {
    let entry = match name {
        FIRECRAWL_SEARCH => (
            "Crawl and search web pages",
            "Gather current documentation and reference material",
        ),
        BRAVE_WEB_SEARCH => (
            "General web search",
            "Check recent facts and public sources",
        ),
        LOGO_SEARCH => ("Brand logo search", "Find brand assets and logos"),
        BYTEROVER_STORE_KNOWLEDGE => (
            "Persistent knowledge store",
            "Store reusable implementation patterns",
        ),
        SEQUENTIAL_THINKING => (
            "Step-by-step reasoning aid",
            "Break complex problems into ordered steps",
        ),
        _ => return None,
    };
    Some(entry)
}
