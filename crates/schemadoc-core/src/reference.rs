//! Reference table: where shared definitions are documented in full
//!
//! A shared definition is expanded once, at its canonical breadcrumb. Every
//! other occurrence is rendered as a cross-reference using the entry's
//! substitute description.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::breadcrumb::Breadcrumb;

/// One immutable row of a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// Schema reference, e.g. `#/definitions/component`
    pub reference: &'static str,
    /// Breadcrumb of the full documentation, `None` when it lives outside
    /// the generated document
    pub canonical: Option<&'static str>,
    /// Cross-reference text used at every other occurrence
    pub description: &'static str,
    /// Breadcrumb suffix for fuzzy matching
    pub suffix: Option<&'static str>,
    /// Replaces the occurrence's own description
    pub alternate_description: Option<&'static str>,
}

impl ReferenceEntry {
    /// Whether `breadcrumb` is the place this definition is documented
    pub fn is_canonical_at(&self, breadcrumb: &Breadcrumb) -> bool {
        self.canonical == Some(breadcrumb.as_str())
    }

    /// Whether `breadcrumb` lies at or below the canonical location
    pub fn covers(&self, breadcrumb: &Breadcrumb) -> bool {
        self.canonical
            .map(|canonical| breadcrumb.is_under(canonical))
            .unwrap_or(false)
    }
}

/// CycloneDX BOM schema references
pub static CYCLONEDX_REFERENCES: &[ReferenceEntry] = &[
    ReferenceEntry {
        reference: "#/definitions/component",
        canonical: Some("/components/[]"),
        description: "Refer to the component definition at /components/[]",
        suffix: None,
        alternate_description: None,
    },
    ReferenceEntry {
        reference: "#/definitions/service",
        canonical: Some("/services/[]"),
        description: "Refer to the service definition at /services/[]",
        suffix: None,
        alternate_description: None,
    },
    ReferenceEntry {
        reference: "#/definitions/licenseChoice",
        canonical: Some("/components/[]/licenses"),
        description: "Refer to the license definition at /components/[]/licenses",
        suffix: Some("/licenses"),
        alternate_description: None,
    },
    ReferenceEntry {
        reference: "#/definitions/externalReference",
        canonical: Some("/externalReference"),
        description: "Refer to the external reference definition at /externalReferences/[]",
        suffix: Some("/externalReference"),
        alternate_description: None,
    },
    ReferenceEntry {
        reference: "#/definitions/externalReference",
        canonical: Some("/externalReferences"),
        description: "Refer to the external reference definition at /externalReferences/[]",
        suffix: Some("/externalReferences"),
        alternate_description: None,
    },
    ReferenceEntry {
        reference: "#/definitions/signature",
        canonical: None,
        description: "Refer to the JSON Signature Format specification \
            (https://cyberphone.github.io/doc/security/jsf.html) or to the XML Signature \
            specification (https://www.w3.org/TR/xmldsig-core/) for implementation details.",
        suffix: Some("/signature"),
        alternate_description: Some(
            "An enveloped digital signature embedded within and specific to this object within \
            the BOM. CycloneDX signatures enable integrity and authenticity verification without \
            separating the signature from the BOM. Enveloped signatures enable each party in the \
            supply chain to take responsibility for and sign their specific data, ensuring its \
            integrity and authenticity. By aggregating all signatures, stakeholders can \
            independently verify discrete pieces of information from each provider, enhancing \
            overall transparency and trust in the supply chain.",
        ),
    },
];

/// Read-only view over a static set of entries
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    entries: &'static [ReferenceEntry],
}

impl ReferenceTable {
    pub const fn new(entries: &'static [ReferenceEntry]) -> Self {
        Self { entries }
    }

    /// A table that never matches
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    pub const fn cyclonedx() -> Self {
        Self::new(CYCLONEDX_REFERENCES)
    }

    pub fn entries(&self) -> &'static [ReferenceEntry] {
        self.entries
    }

    /// First entry registered for `reference`
    pub fn lookup(&self, reference: &str) -> Option<&'static ReferenceEntry> {
        self.entries.iter().find(|entry| entry.reference == reference)
    }

    /// Entry for `reference` as seen from `breadcrumb`
    ///
    /// A reference may be registered at several canonical locations; the
    /// one documented at `breadcrumb` wins, otherwise the first.
    pub fn lookup_at(
        &self,
        reference: &str,
        breadcrumb: &Breadcrumb,
    ) -> Option<&'static ReferenceEntry> {
        let mut candidates = self
            .entries
            .iter()
            .filter(|entry| entry.reference == reference)
            .peekable();
        let first = *candidates.peek()?;
        Some(
            candidates
                .find(|entry| entry.is_canonical_at(breadcrumb))
                .unwrap_or(first),
        )
    }

    /// First entry whose suffix ends `breadcrumb`
    pub fn fuzzy_lookup(&self, breadcrumb: &Breadcrumb) -> Option<&'static ReferenceEntry> {
        self.entries.iter().find(|entry| {
            entry
                .suffix
                .map(|suffix| breadcrumb.ends_with(suffix))
                .unwrap_or(false)
        })
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::cyclonedx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let table = ReferenceTable::cyclonedx();
        let entry = table.lookup("#/definitions/component").unwrap();
        assert_eq!(entry.canonical, Some("/components/[]"));
        assert!(table.lookup("#/definitions/nothing").is_none());
    }

    #[test]
    fn test_lookup_prefers_canonical_location() {
        let table = ReferenceTable::cyclonedx();
        let here = Breadcrumb::new("/externalReferences");
        let entry = table.lookup_at("#/definitions/externalReference", &here).unwrap();
        assert_eq!(entry.canonical, Some("/externalReferences"));

        let elsewhere = Breadcrumb::new("/components/[]/externalReferences");
        let entry = table
            .lookup_at("#/definitions/externalReference", &elsewhere)
            .unwrap();
        assert_eq!(entry.canonical, Some("/externalReference"));
    }

    #[test]
    fn test_fuzzy_lookup() {
        let table = ReferenceTable::cyclonedx();
        let entry = table
            .fuzzy_lookup(&Breadcrumb::new("/services/[]/licenses"))
            .unwrap();
        assert_eq!(entry.reference, "#/definitions/licenseChoice");
        assert!(entry.covers(&Breadcrumb::new("/components/[]/licenses/[]")));
        assert!(!entry.covers(&Breadcrumb::new("/services/[]/licenses")));

        let signature = table
            .fuzzy_lookup(&Breadcrumb::new("/metadata/signature"))
            .unwrap();
        assert!(signature.alternate_description.is_some());
        assert!(!signature.covers(&Breadcrumb::new("/signature")));
        assert!(table.fuzzy_lookup(&Breadcrumb::new("/metadata")).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = ReferenceTable::empty();
        assert!(table.entries().is_empty());
        assert!(table.lookup("#/definitions/component").is_none());
    }
}
