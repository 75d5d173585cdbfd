//! Array routing and the single-item merge
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::{example_texts, property_label, Leaf, Site, Traversal, UNIQUE_ITEMS_NOTE};
use crate::breadcrumb::Breadcrumb;
use crate::complex_type::ComplexType;
use crate::error::{Error, MergeConflict, Result};
use crate::schema::{sentence_case, SchemaNode};
use tracing::debug;

impl<'s> Traversal<'s> {
    pub(super) fn array(&mut self, mut site: Site, name: Option<&str>, crumb: &Breadcrumb) -> Result<()> {
        if self.check_imposter(&mut site, crumb) {
            return self.property(site, name, crumb, Leaf::default());
        }

        if let Some(items) = site.node.items.clone() {
            let item_crumb = crumb.array_item();
            let item_site = self.resolve(&items, &item_crumb);
            if item_site.node.is_scalar() {
                return self.scalar_array(site, &item_site.node, name, crumb);
            }

            let appended = item_sentence(&item_site.node);
            let title = site
                .node
                .title
                .as_deref()
                .map(sentence_case)
                .or_else(|| name.map(str::to_string));
            let deprecated = site.node.is_deprecated();
            return self.in_section(crumb, title, deprecated, |this| {
                this.builder.paragraph("Location", crumb.as_str());
                if let Some(name) = name {
                    this.builder.paragraph("Property", property_label(name, &site));
                }
                this.constraints(&site, crumb, Some("Description"), appended.as_deref())?;
                this.builder.examples(example_texts(&site.node));
                if site.node.unique_items == Some(true) {
                    this.builder.note(UNIQUE_ITEMS_NOTE);
                }

                let item_name = name.map(singularize);
                this.object(item_site, item_name.as_deref(), &item_crumb, true)
            });
        }

        match ComplexType::classify(&site.node) {
            Some(kind) => {
                self.property(site.clone(), name, crumb, Leaf::default())?;
                let reference = site.reference.clone();
                self.guarded(reference, crumb, |this| this.complex(&site, kind, name, crumb))
            }
            None => Err(Error::unhandled_array_shape(crumb)),
        }
    }

    /// Document an array of scalars as one property section
    fn scalar_array(&mut self, mut site: Site, item: &SchemaNode, name: Option<&str>, crumb: &Breadcrumb) -> Result<()> {
        let array_type = site.node.schema_type.map(|t| t.display_type()).unwrap_or_default();
        let item_type = item.schema_type.map(|t| t.display_type()).unwrap_or_default();
        debug!(breadcrumb = %crumb, item_type = %item_type, "Merging single-item array");

        site.notes.type_label = Some(format!("{} (of {})", array_type, item_type));
        let appended = item_sentence(item);
        merge_single_item(&mut site.node, item, crumb)?;
        self.property(
            site,
            name,
            crumb,
            Leaf {
                appended,
                ..Leaf::default()
            },
        )
    }
}

/// Lift the constraints of a scalar item type onto its array
///
/// Fails when both declare `examples` or when the array already carries an
/// enumeration; neither can be merged without losing data.
pub fn merge_single_item(array: &mut SchemaNode, item: &SchemaNode, crumb: &Breadcrumb) -> Result<()> {
    if array.examples.is_some() && item.examples.is_some() {
        return Err(Error::merge_conflict(crumb, MergeConflict::Examples));
    }
    if array.enum_values.is_some() || array.enum_descriptions.is_some() {
        return Err(Error::merge_conflict(crumb, MergeConflict::Enum));
    }

    lift(&mut array.minimum, &item.minimum);
    lift(&mut array.maximum, &item.maximum);
    lift(&mut array.default, &item.default);
    lift(&mut array.format, &item.format);
    lift(&mut array.pattern, &item.pattern);
    lift(&mut array.examples, &item.examples);

    if let Some(description) = &item.description {
        array.description = Some(match array.description.take() {
            Some(own) => format!("{} {}", own, description),
            None => description.clone(),
        });
    }

    array.enum_values = item.enum_values.clone();
    array.enum_descriptions = item.enum_descriptions.clone();
    Ok(())
}

fn lift<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if source.is_some() {
        *target = source.clone();
    }
}

/// Item name for a plural property name
///
/// `ies` becomes `y`, `hes` becomes `h`, otherwise a trailing `s` is dropped.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = name.strip_suffix("hes") {
        format!("{}h", stem)
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

/// `a` or `an`, by the first letter
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') | None => "an",
        Some(_) => "a",
    }
}

/// The sentence appended to an array's description naming its item type
pub fn item_sentence(item: &SchemaNode) -> Option<String> {
    match (item.schema_type, item.title.as_deref()) {
        (Some(schema_type), _) if !schema_type.is_container() => Some(format!(
            "Each item of this array shall be {} {}.",
            indefinite_article(schema_type.as_str()),
            schema_type
        )),
        (_, Some(title)) => Some(format!(
            "Each item of this array shall be {} {} object.",
            indefinite_article(title),
            title
        )),
        _ => None,
    }
}
