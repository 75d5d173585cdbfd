//! Schema traversal
//!
//! A depth-first walk over the schema tree that decides, for every node,
//! which sections, tables and cross-references to emit. Traversal decisions
//! (requirement, imposter status, origin) travel beside the node in a
//! [`Site`] and never touch the shared schema.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

mod array;
mod complex;

use crate::breadcrumb::Breadcrumb;
use crate::complex_type::ComplexType;
use crate::document::{
    DiagnosticKind, Document, DocumentBuilder, EnumerationRow, PropertyRow, Requirement,
};
use crate::error::{Error, Result};
use crate::format;
use crate::reference::{ReferenceEntry, ReferenceTable};
use crate::schema::{sentence_case, SchemaNode, SchemaType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

pub use array::{indefinite_article, item_sentence, merge_single_item, singularize};

const UNIQUE_ITEMS_NOTE: &str = "All items shall be unique.";

/// Tunable generation behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// List combinator options that declare neither `type` nor `required`
    /// in the option summary
    pub list_untyped_options: bool,
    /// Breadcrumb suffixes whose `enum` is not rendered
    pub suppress_enum_suffixes: Vec<String>,
    /// Title for untitled property sections without a property name
    pub default_title: String,
    /// Title for untitled combinator options
    pub default_option_title: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            list_untyped_options: false,
            suppress_enum_suffixes: vec!["/license/id".to_string()],
            default_title: "Unnamed Section".to_string(),
            default_option_title: "Unnamed Option".to_string(),
        }
    }
}

/// Produces a [`Document`] from a schema tree
#[derive(Debug, Clone)]
pub struct Generator<'s> {
    schema: &'s SchemaNode,
    options: GeneratorOptions,
    references: ReferenceTable,
}

impl<'s> Generator<'s> {
    pub fn new(schema: &'s SchemaNode) -> Self {
        Self {
            schema,
            options: GeneratorOptions::default(),
            references: ReferenceTable::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_references(mut self, references: ReferenceTable) -> Self {
        self.references = references;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Walk the whole schema
    ///
    /// Fails on the first structural or configuration error; no partial
    /// document is returned.
    pub fn run(&self) -> Result<Document> {
        info!(
            definitions = self.schema.definitions.len(),
            references = self.references.entries().len(),
            "Generating document"
        );

        let mut traversal = Traversal::new(self.schema, &self.options, self.references);
        let root = Breadcrumb::root();
        let site = traversal.resolve(self.schema, &root);
        match site.node.schema_type {
            Some(SchemaType::Object) => traversal.object(site, None, &root, false)?,
            Some(SchemaType::Array) => traversal.array(site, None, &root)?,
            other => {
                return Err(Error::unsupported_root_type(
                    other.map(|t| t.as_str()).unwrap_or("undefined"),
                ))
            }
        }

        let document = traversal.builder.finish();
        info!(
            operations = document.ops.len(),
            diagnostics = document.diagnostics.len(),
            "Document generated"
        );
        Ok(document)
    }
}

/// Generate with default options and the default reference table
pub fn generate(schema: &SchemaNode) -> Result<Document> {
    Generator::new(schema).run()
}

/// Decisions made about one occurrence of a node
#[derive(Debug, Clone, Default)]
struct Annotations {
    requirement: Option<Requirement>,
    type_label: Option<String>,
    origin: Option<String>,
    imposter: bool,
}

/// A resolved node at one position of the output tree
///
/// `node` is an owned copy with use-site overrides applied; `reference` is
/// the `$ref` it was resolved from.
#[derive(Debug, Clone)]
struct Site {
    node: SchemaNode,
    notes: Annotations,
    reference: Option<String>,
}

/// How a property section is laid out
#[derive(Debug, Default)]
struct Leaf {
    from_array: bool,
    appended: Option<String>,
    omit_location: bool,
}

type Properties = IndexMap<String, (SchemaNode, Requirement)>;

struct Traversal<'s> {
    schema: &'s SchemaNode,
    options: &'s GeneratorOptions,
    references: ReferenceTable,
    builder: DocumentBuilder,
    /// Breadcrumbs below which everything is a cross-reference
    imposters: Vec<Breadcrumb>,
    /// References currently being expanded, with where
    expanding: Vec<(String, Breadcrumb)>,
}

impl<'s> Traversal<'s> {
    fn new(schema: &'s SchemaNode, options: &'s GeneratorOptions, references: ReferenceTable) -> Self {
        Self {
            schema,
            options,
            references,
            builder: DocumentBuilder::new(),
            imposters: Vec::new(),
            expanding: Vec::new(),
        }
    }

    /// Follow `$ref` to its definition and overlay the use-site fields
    fn resolve(&mut self, raw: &SchemaNode, crumb: &Breadcrumb) -> Site {
        let mut notes = Annotations {
            type_label: raw.type_label.clone(),
            imposter: raw.imposter,
            ..Annotations::default()
        };
        let Some(reference) = raw.reference.clone() else {
            return Site {
                node: raw.clone(),
                notes,
                reference: None,
            };
        };

        let schema = self.schema;
        let mut target: Option<&SchemaNode> = None;
        let mut seen: Vec<&str> = Vec::new();
        let mut next = Some(reference.as_str());
        while let Some(current) = next {
            if seen.contains(&current) {
                break;
            }
            seen.push(current);
            match schema.definition(current) {
                Some(definition) => {
                    target = Some(definition);
                    next = definition.reference.as_deref();
                }
                None => {
                    self.builder.diagnostic(
                        crumb.clone(),
                        DiagnosticKind::MissingDefinition {
                            reference: current.to_string(),
                        },
                    );
                    next = None;
                }
            }
        }

        let mut node = match target {
            Some(definition) => {
                let mut node = definition.clone();
                node.title = raw.title.clone().or(node.title);
                node.description = raw.description.clone().or(node.description);
                node.examples = raw.examples.clone().or(node.examples);
                node.deprecated = raw.deprecated.or(node.deprecated);
                node
            }
            None => {
                let mut node = raw.clone();
                node.schema_type.get_or_insert(SchemaType::Object);
                node
            }
        };
        node.reference = None;
        notes.type_label = notes.type_label.or_else(|| node.type_label.clone());
        notes.imposter |= node.imposter;

        Site {
            node,
            notes,
            reference: Some(reference),
        }
    }

    /// Resolve a property and decide whether it is documented here
    fn property_site(&mut self, raw: &SchemaNode, requirement: Requirement, crumb: &Breadcrumb) -> Site {
        let mut site = self.resolve(raw, crumb);
        site.notes.requirement = Some(requirement);
        self.check_imposter(&mut site, crumb);
        site
    }

    fn check_imposter(&mut self, site: &mut Site, crumb: &Breadcrumb) -> bool {
        if site.notes.imposter {
            return true;
        }
        if self.imposters.iter().any(|prefix| crumb.is_under(prefix.as_str())) {
            site.notes.imposter = true;
            return true;
        }

        let references = self.references;
        if let Some(reference) = site.reference.clone() {
            if let Some(entry) = references.lookup_at(&reference, crumb) {
                if !entry.is_canonical_at(crumb) {
                    self.adopt(site, entry, crumb);
                    return true;
                }
            }
        }
        if let Some(entry) = references.fuzzy_lookup(crumb) {
            if !entry.covers(crumb) {
                self.adopt(site, entry, crumb);
                return true;
            }
        }

        if self.mark_recursive(site, crumb) {
            self.imposters.push(crumb.clone());
            return true;
        }
        false
    }

    /// Cross-reference `site` to where its definition is already being expanded
    fn mark_recursive(&self, site: &mut Site, crumb: &Breadcrumb) -> bool {
        let recursive = site.reference.as_ref().and_then(|reference| {
            self.expanding
                .iter()
                .find(|(expanding, _)| expanding == reference)
                .map(|(_, at)| at.clone())
        });
        match recursive {
            Some(at) => {
                debug!(breadcrumb = %crumb, definition = %at, "Recursive reference");
                site.notes.origin = Some(format!("Refer to the recursive definition at {}", at));
                site.notes.imposter = true;
                true
            }
            None => false,
        }
    }

    fn adopt(&mut self, site: &mut Site, entry: &ReferenceEntry, crumb: &Breadcrumb) {
        debug!(breadcrumb = %crumb, reference = entry.reference, "Imposter");
        site.notes.origin = Some(entry.description.to_string());
        if let Some(alternate) = entry.alternate_description {
            site.node.description = Some(alternate.to_string());
        }
        site.notes.imposter = true;
        self.imposters.push(crumb.clone());
    }

    /// Run `body` inside a section that is closed even when `body` fails
    fn in_section<F>(&mut self, crumb: &Breadcrumb, title: Option<String>, deprecated: bool, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.builder.open_section(crumb, title.as_deref(), deprecated);
        let result = body(self);
        self.builder.close_section();
        result
    }

    /// Run `body` with `reference` marked as being expanded at `crumb`
    fn guarded<F>(&mut self, reference: Option<String>, crumb: &Breadcrumb, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let pushed = match reference {
            Some(reference) => {
                self.expanding.push((reference, crumb.clone()));
                true
            }
            None => false,
        };
        let result = body(self);
        if pushed {
            self.expanding.pop();
        }
        result
    }

    /// Route a property by its shape
    fn by_type(&mut self, site: Site, key: &str, crumb: &Breadcrumb, from_array: bool) -> Result<()> {
        let leaf = Leaf {
            from_array,
            ..Leaf::default()
        };
        match site.node.schema_type {
            Some(SchemaType::Array) => self.array(site, Some(key), crumb),
            Some(SchemaType::Object) => self.object(site, Some(key), crumb, from_array),
            _ => match ComplexType::classify(&site.node) {
                Some(kind) => {
                    self.property(site.clone(), Some(key), crumb, leaf)?;
                    if site.notes.imposter {
                        return Ok(());
                    }
                    let reference = site.reference.clone();
                    self.guarded(reference, crumb, |this| this.complex(&site, kind, Some(key), crumb))
                }
                None => self.property(site, Some(key), crumb, leaf),
            },
        }
    }

    fn object(&mut self, mut site: Site, name: Option<&str>, crumb: &Breadcrumb, from_array: bool) -> Result<()> {
        let imposter = self.check_imposter(&mut site, crumb);
        if site.node.is_plain_scalar() {
            let leaf = Leaf {
                from_array,
                ..Leaf::default()
            };
            return self.property(site, name, crumb, leaf);
        }

        let title = site
            .node
            .title
            .as_deref()
            .map(sentence_case)
            .or_else(|| name.map(str::to_string));
        let deprecated = site.node.is_deprecated();

        self.in_section(crumb, title, deprecated, |this| {
            this.builder.paragraph("Location", crumb.as_str());
            if let (Some(name), false) = (name, from_array) {
                this.builder.paragraph("Property", property_label(name, &site));
            }
            this.constraints(&site, crumb, None, None)?;
            this.builder.examples(example_texts(&site.node));

            if imposter {
                if let Some(origin) = &site.notes.origin {
                    this.builder.origin(origin);
                }
                return Ok(());
            }

            this.guarded(site.reference.clone(), crumb, |this| {
                let properties = this.collect_properties(&site.node, crumb);
                if !properties.is_empty() {
                    let caption = properties_caption(crumb, name.or(site.node.title.as_deref()));
                    let rows = this.property_rows(&properties);
                    this.builder.properties_table(caption, rows);

                    for (key, (child, requirement)) in &properties {
                        let child_crumb = crumb.child(key);
                        let child_site = this.property_site(child, *requirement, &child_crumb);
                        this.by_type(child_site, key, &child_crumb, false)?;
                    }
                } else if let Some(kind) = ComplexType::classify(&site.node) {
                    this.complex(&site, kind, name, crumb)?;
                }
                Ok(())
            })
        })
    }

    /// Own properties plus those contributed by every `allOf` branch
    fn collect_properties(&mut self, node: &SchemaNode, crumb: &Breadcrumb) -> Properties {
        let mut properties = Properties::new();
        if let Some(own) = &node.properties {
            for (key, child) in own {
                properties.insert(key.clone(), (child.clone(), node.requirement_of(key)));
            }
        }
        for branch in node.all_of.iter().flatten() {
            let branch = self.resolve(branch, crumb);
            for (key, child) in branch.node.properties.iter().flatten() {
                properties.insert(key.clone(), (child.clone(), branch.node.requirement_of(key)));
            }
        }
        properties.retain(|key, _| !key.starts_with('$'));
        properties
    }

    fn property_rows(&self, properties: &Properties) -> Vec<PropertyRow> {
        properties
            .iter()
            .map(|(key, (child, requirement))| {
                let resolved = child
                    .reference
                    .as_deref()
                    .and_then(|reference| self.schema.definition(reference))
                    .unwrap_or(child);
                let mut description = child
                    .description
                    .clone()
                    .or_else(|| resolved.description.clone())
                    .unwrap_or_default();
                if let Some(text) = self.reference_text(child).or_else(|| self.reference_text(resolved)) {
                    if !description.is_empty() {
                        description.push(' ');
                    }
                    description.push_str(text);
                }
                PropertyRow {
                    name: key.clone(),
                    type_label: type_cell(child, resolved),
                    requirement: *requirement,
                    description,
                }
            })
            .collect()
    }

    /// Cross-reference text for an array whose items are a known reference
    fn reference_text(&self, node: &SchemaNode) -> Option<&'static str> {
        let reference = node.items.as_ref()?.reference.as_deref()?;
        self.references.lookup(reference).map(|entry| entry.description)
    }

    /// A leaf section: title, location, constraints, examples, enumeration
    fn property(&mut self, mut site: Site, name: Option<&str>, crumb: &Breadcrumb, leaf: Leaf) -> Result<()> {
        if self
            .options
            .suppress_enum_suffixes
            .iter()
            .any(|suffix| crumb.ends_with(suffix))
        {
            site.node.enum_values = None;
        }

        let title = match site.node.title.as_deref() {
            Some(title) => Some(sentence_case(title)),
            None if crumb.is_array_item() => None,
            None => {
                let substituted = name.unwrap_or(&self.options.default_title).to_string();
                self.builder.diagnostic(
                    crumb.clone(),
                    DiagnosticKind::MissingTitle {
                        substituted: substituted.clone(),
                    },
                );
                Some(substituted)
            }
        };

        if site.node.schema_type.is_none() && !leaf.from_array && !site.node.has_combinator() {
            return Err(Error::type_not_defined(crumb));
        }

        let deprecated = site.node.is_deprecated();
        self.in_section(crumb, title, deprecated, |this| {
            if !leaf.omit_location {
                this.builder.paragraph("Location", crumb.as_str());
            }
            if let (Some(name), false) = (name, leaf.from_array) {
                this.builder.paragraph("Property", property_label(name, &site));
            }
            this.constraints(&site, crumb, None, leaf.appended.as_deref())?;
            this.builder.examples(example_texts(&site.node));
            this.enumeration(&site.node);
            if site.node.is_array() && site.node.unique_items == Some(true) {
                this.builder.note(UNIQUE_ITEMS_NOTE);
            }
            if let Some(origin) = &site.notes.origin {
                this.builder.origin(origin);
            }
            Ok(())
        })
    }

    /// Type, value constraints and description, in that order
    fn constraints(
        &mut self,
        site: &Site,
        crumb: &Breadcrumb,
        description_label: Option<&str>,
        appended: Option<&str>,
    ) -> Result<()> {
        let node = &site.node;
        let type_label = site
            .notes
            .type_label
            .clone()
            .or_else(|| node.schema_type.map(|t| t.display_type()));
        if let Some(type_label) = type_label {
            self.builder.paragraph("Type", type_label);
        }
        if let Some(minimum) = &node.minimum {
            self.builder.paragraph("Minimum Value", value_text(minimum));
        }
        if let Some(maximum) = &node.maximum {
            self.builder.paragraph("Maximum Value", value_text(maximum));
        }
        if let Some(default) = &node.default {
            self.builder.paragraph("Default Value", value_text(default));
        }
        if let Some(constant) = &node.const_value {
            self.builder.paragraph("Constant Value", value_text(constant));
        }
        if let Some(format) = &node.format {
            let prose = format::describe(format)
                .ok_or_else(|| Error::unsupported_format(format.as_str(), crumb))?;
            self.builder.paragraph("Format", prose);
        }
        if let Some(pattern) = &node.pattern {
            self.builder.paragraph("Pattern Constraint", pattern.as_str());
        }

        let description = match (node.description.as_deref(), appended) {
            (Some(description), Some(appended)) => format!("{} {}", description, appended),
            (Some(description), None) => description.to_string(),
            (None, Some(appended)) => appended.to_string(),
            (None, None) => String::new(),
        };
        self.builder.prose(description_label, &description);
        Ok(())
    }

    fn enumeration(&mut self, node: &SchemaNode) {
        let Some(values) = &node.enum_values else {
            return;
        };
        match &node.enum_descriptions {
            Some(descriptions) => {
                let rows = descriptions
                    .iter()
                    .map(|(value, description)| EnumerationRow {
                        value: value.clone(),
                        description: description.clone(),
                    })
                    .collect();
                self.builder.enumeration_table(rows);
            }
            None => self.builder.values(values.iter().map(value_text).collect()),
        }
    }
}

/// `name (Required)`, with ` and Deprecated` when applicable
fn property_label(name: &str, site: &Site) -> String {
    let mut label = name.to_string();
    if let Some(requirement) = site.notes.requirement {
        label.push_str(&format!(" ({})", requirement));
    }
    let flagged = site
        .node
        .description
        .as_deref()
        .map(|d| d.to_uppercase().contains("[DEPRECATED]"))
        .unwrap_or(false);
    if site.node.is_deprecated() || flagged {
        label.push_str(" and Deprecated");
    }
    label
}

fn properties_caption(crumb: &Breadcrumb, name: Option<&str>) -> String {
    if crumb.is_root() {
        "Properties for the root object".to_string()
    } else {
        format!("Properties for the {} object", name.unwrap_or("unnamed"))
    }
}

/// Type column of a properties table row
fn type_cell(child: &SchemaNode, resolved: &SchemaNode) -> String {
    if let Some(label) = child.type_label.as_ref().or(resolved.type_label.as_ref()) {
        return label.clone();
    }
    match (resolved.schema_type, ComplexType::classify(resolved)) {
        (Some(schema_type), _) => schema_type.display_type(),
        (None, Some(kind)) => sentence_case(kind.label()),
        (None, None) => String::new(),
    }
}

/// Literal rendering of a JSON value; strings lose their quotes
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn example_texts(node: &SchemaNode) -> Vec<String> {
    node.examples
        .iter()
        .flatten()
        .map(|example| match example {
            Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocOp;
    use serde_json::json;

    fn schema(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value).unwrap()
    }

    #[test]
    fn test_root_must_be_container() {
        let err = generate(&schema(json!({ "type": "string" }))).unwrap_err();
        assert!(matches!(err, Error::UnsupportedRootType { ref found } if found == "string"));

        let err = generate(&schema(json!({ "title": "Nothing" }))).unwrap_err();
        assert!(matches!(err, Error::UnsupportedRootType { ref found } if found == "undefined"));
    }

    #[test]
    fn test_root_object_table() {
        let document = generate(&schema(json!({
            "type": "object",
            "title": "Root",
            "properties": {
                "name": { "type": "string", "title": "Name" }
            },
            "required": ["name"]
        })))
        .unwrap();

        let tables: Vec<_> = document.properties_tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0, "Properties for the root object");
        assert_eq!(tables[0].1[0].name, "name");
        assert_eq!(tables[0].1[0].type_label, "String");
        assert_eq!(tables[0].1[0].requirement, Requirement::Required);

        let sections: Vec<_> = document.sections().collect();
        assert_eq!(sections, vec![("sec", Some("Root")), ("sec-name", Some("Name"))]);
        assert!(document.is_balanced());
        assert!(document.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_type_is_fatal() {
        let err = generate(&schema(json!({
            "type": "object",
            "properties": { "broken": { "title": "Broken" } }
        })))
        .unwrap_err();
        assert!(matches!(err, Error::TypeNotDefined { ref breadcrumb } if breadcrumb == "/broken"));
    }

    #[test]
    fn test_missing_title_is_reported() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": { "version": { "type": "integer" } }
        })))
        .unwrap();

        assert_eq!(document.diagnostics.len(), 1);
        assert_eq!(
            document.diagnostics[0].kind,
            DiagnosticKind::MissingTitle {
                substituted: "version".to_string()
            }
        );
        assert!(document.sections().any(|(_, title)| title == Some("version")));
    }

    #[test]
    fn test_constraint_paragraph_order() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "when": {
                    "type": "string",
                    "title": "When",
                    "description": "The time it happened",
                    "format": "date-time",
                    "pattern": "^2",
                    "default": "2020-01-01T00:00:00Z"
                }
            }
        })))
        .unwrap();

        let labels: Vec<_> = document
            .ops
            .iter()
            .skip_while(|op| !matches!(op, DocOp::OpenSection { title: Some(t), .. } if t == "When"))
            .filter_map(|op| match op {
                DocOp::Paragraph { label, .. } => Some(label.clone().unwrap_or_default()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "Location",
                "Property",
                "Type",
                "Default Value",
                "Format",
                "Pattern Constraint",
                ""
            ]
        );
    }

    #[test]
    fn test_unsupported_format_is_fatal() {
        let err = generate(&schema(json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "title": "Id", "format": "uuid" }
            }
        })))
        .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.breadcrumb(), Some("/id"));
    }

    #[test]
    fn test_enum_with_descriptions_renders_table() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "kind": {
                    "type": "string",
                    "title": "Kind",
                    "enum": ["a", "b"],
                    "meta:enum": { "a": "The first", "b": "The second" }
                },
                "mode": { "type": "string", "title": "Mode", "enum": ["x", "y"] }
            }
        })))
        .unwrap();

        assert!(document.ops.iter().any(|op| matches!(
            op,
            DocOp::EnumerationTable { rows, .. } if rows.len() == 2 && rows[1].description == "The second"
        )));
        assert!(document.ops.contains(&DocOp::List {
            ordered: false,
            items: vec!["x".to_string(), "y".to_string()]
        }));
    }

    #[test]
    fn test_license_id_enum_suppressed() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "license": {
                    "type": "object",
                    "title": "License",
                    "properties": {
                        "id": { "type": "string", "title": "ID", "enum": ["MIT", "Apache-2.0"] }
                    }
                }
            }
        })))
        .unwrap();
        assert!(!document.ops.iter().any(|op| matches!(op, DocOp::List { .. })));
    }

    #[test]
    fn test_all_of_properties_merge_into_one_table() {
        let document = generate(&schema(json!({
            "type": "object",
            "title": "Root",
            "properties": {
                "name": { "type": "string", "title": "Name" }
            },
            "allOf": [
                { "$ref": "#/definitions/extra" }
            ],
            "definitions": {
                "extra": {
                    "type": "object",
                    "required": ["size"],
                    "properties": {
                        "size": { "type": "integer", "title": "Size" }
                    }
                }
            }
        })))
        .unwrap();

        let tables: Vec<_> = document.properties_tables().collect();
        assert_eq!(tables.len(), 1);
        let names: Vec<_> = tables[0].1.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["name", "size"]);
        assert_eq!(tables[0].1[1].requirement, Requirement::Required);
    }

    #[test]
    fn test_dollar_properties_skipped() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "$schema": { "type": "string" },
                "name": { "type": "string", "title": "Name" }
            }
        })))
        .unwrap();
        let (_, rows) = document.properties_tables().next().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!document.sections().any(|(id, _)| id.contains("schema")));
    }

    #[test]
    fn test_missing_definition_is_recoverable() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "ghost": { "$ref": "#/definitions/ghost", "title": "Ghost" }
            }
        })))
        .unwrap();
        assert_eq!(
            document.diagnostics[0].kind,
            DiagnosticKind::MissingDefinition {
                reference: "#/definitions/ghost".to_string()
            }
        );
        assert!(document.sections().any(|(id, _)| id == "sec-ghost"));
    }

    #[test]
    fn test_deprecated_property_label() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "old": { "type": "string", "title": "Old", "description": "[Deprecated] Do not use." }
            }
        })))
        .unwrap();
        assert_eq!(
            document.paragraphs("Property").collect::<Vec<_>>(),
            vec!["old (Optional) and Deprecated"]
        );
    }

    #[test]
    fn test_recursive_definition_is_cross_referenced() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "node": { "$ref": "#/definitions/node" }
            },
            "definitions": {
                "node": {
                    "type": "object",
                    "title": "Node",
                    "properties": {
                        "child": { "$ref": "#/definitions/node" }
                    }
                }
            }
        })))
        .unwrap();

        assert!(document.ops.contains(&DocOp::Origin {
            text: "Refer to the recursive definition at /node".to_string()
        }));
        assert!(document.is_balanced());
    }

    #[test]
    fn test_recursive_combinator_option_is_cross_referenced() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "node": { "$ref": "#/definitions/node" }
            },
            "definitions": {
                "node": {
                    "type": "object",
                    "title": "Node",
                    "properties": {
                        "child": {
                            "title": "Child",
                            "oneOf": [{ "$ref": "#/definitions/node" }]
                        }
                    }
                }
            }
        })))
        .unwrap();

        assert!(document.ops.contains(&DocOp::Origin {
            text: "Refer to the recursive definition at /node".to_string()
        }));
        let sections: Vec<_> = document.sections().collect();
        assert_eq!(
            sections,
            vec![
                ("sec", None),
                ("sec-node", Some("Node")),
                ("sec-node-child", Some("Child")),
                ("sec-node-child-1", Some("Node")),
            ]
        );
        assert!(document.is_balanced());
    }

    #[test]
    fn test_use_site_overrides_do_not_leak() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "first": { "$ref": "#/definitions/hash", "title": "First hash" },
                "second": { "$ref": "#/definitions/hash" }
            },
            "definitions": {
                "hash": { "type": "string", "title": "Hash" }
            }
        })))
        .unwrap();
        let titles: Vec<_> = document.sections().filter_map(|(_, title)| title).collect();
        assert_eq!(titles, vec!["First hash", "Hash"]);
    }
}
