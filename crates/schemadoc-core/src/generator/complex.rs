//! Combinator (`oneOf` / `anyOf` / `allOf`) rendering
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::{Leaf, Properties, Site, Traversal};
use crate::breadcrumb::Breadcrumb;
use crate::complex_type::ComplexType;
use crate::document::DiagnosticKind;
use crate::error::{Error, Result};
use crate::schema::SchemaType;

impl<'s> Traversal<'s> {
    /// Note, option summary, one section per option, then option children
    ///
    /// Options share the breadcrumb of the node that declares them.
    pub(super) fn complex(&mut self, site: &Site, kind: ComplexType, name: Option<&str>, crumb: &Breadcrumb) -> Result<()> {
        let options = kind
            .options(&site.node)
            .ok_or_else(|| Error::missing_combinator(crumb, kind.property()))?;

        self.builder.note(&format!("Must be {}:", kind.label()));
        let listed: Vec<String> = options
            .iter()
            .filter(|option| {
                self.options.list_untyped_options
                    || option.schema_type.is_some()
                    || option.required.is_some()
            })
            .map(|option| {
                option
                    .title
                    .clone()
                    .unwrap_or_else(|| self.options.default_option_title.clone())
            })
            .collect();
        self.builder.numbered(&listed);

        let mut prepared: Vec<(Site, Properties)> = Vec::with_capacity(options.len());
        for option in options {
            let mut option = self.resolve(option, crumb);
            let recursive = self.mark_recursive(&mut option, crumb);
            if option.node.schema_type.is_none() {
                let assumed = if name.is_some() {
                    SchemaType::Object
                } else {
                    SchemaType::String
                };
                self.builder
                    .diagnostic(crumb.clone(), DiagnosticKind::MissingOptionType { assumed });
                option.node.schema_type = Some(assumed);
            }
            let title = match option.node.title.clone() {
                Some(title) => title,
                None => {
                    let substituted = self.options.default_option_title.clone();
                    self.builder.diagnostic(
                        crumb.clone(),
                        DiagnosticKind::MissingOptionTitle {
                            substituted: substituted.clone(),
                        },
                    );
                    option.node.title = Some(substituted.clone());
                    substituted
                }
            };

            let leaf = Leaf {
                omit_location: true,
                ..Leaf::default()
            };
            self.property(option.clone(), None, crumb, leaf)?;
            if recursive {
                continue;
            }

            let properties = self.collect_properties(&option.node, crumb);
            if !properties.is_empty() {
                let caption = format!("Properties for the {} object", title.to_lowercase());
                let rows = self.property_rows(&properties);
                self.builder.properties_table(caption, rows);
            }
            prepared.push((option, properties));
        }

        for (option, properties) in prepared {
            let reference = option.reference.clone();
            if option.node.is_array() {
                self.array(option, name, crumb)?;
            }
            self.guarded(reference, crumb, |this| {
                for (key, (child, requirement)) in &properties {
                    let child_crumb = crumb.child(key);
                    let child_site = this.property_site(child, *requirement, &child_crumb);
                    this.by_type(child_site, key, &child_crumb, false)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocOp, Requirement};
    use crate::generator::{generate, Generator, GeneratorOptions};
    use crate::reference::ReferenceTable;
    use crate::schema::SchemaNode;
    use serde_json::{json, Value};

    fn schema(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value).unwrap()
    }

    fn licensing() -> SchemaNode {
        schema(json!({
            "type": "object",
            "properties": {
                "choice": {
                    "title": "Choice",
                    "oneOf": [
                        {
                            "title": "License",
                            "required": ["id"],
                            "properties": {
                                "id": { "type": "string", "title": "License ID" }
                            }
                        },
                        {
                            "type": "string",
                            "title": "Expression"
                        },
                        {
                            "description": "Anything else"
                        }
                    ]
                }
            }
        }))
    }

    #[test]
    fn test_option_summary_skips_untyped_options() {
        let document = generate(&licensing()).unwrap();

        assert!(document.ops.contains(&DocOp::Note {
            text: "Shall be one of:".to_string()
        }));
        assert!(document.ops.contains(&DocOp::List {
            ordered: true,
            items: vec!["Licence".to_string(), "Expression".to_string()]
        }));
    }

    #[test]
    fn test_option_summary_policy() {
        let node = licensing();
        let options = GeneratorOptions {
            list_untyped_options: true,
            ..GeneratorOptions::default()
        };
        let document = Generator::new(&node).with_options(options).run().unwrap();
        assert!(document.ops.contains(&DocOp::List {
            ordered: true,
            items: vec![
                "Licence".to_string(),
                "Expression".to_string(),
                "Unnamed Option".to_string()
            ]
        }));
    }

    #[test]
    fn test_option_defaults_are_reported() {
        let document = generate(&licensing()).unwrap();
        let kinds: Vec<_> = document.diagnostics.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::MissingOptionType {
                    assumed: SchemaType::Object
                },
                DiagnosticKind::MissingOptionType {
                    assumed: SchemaType::Object
                },
                DiagnosticKind::MissingOptionTitle {
                    substituted: "Unnamed Option".to_string()
                },
            ]
        );
        assert!(document
            .diagnostics
            .iter()
            .all(|d| d.breadcrumb.as_str() == "/choice"));
    }

    #[test]
    fn test_option_properties_table_and_children() {
        let document = generate(&licensing()).unwrap();

        let (caption, rows) = document
            .properties_tables()
            .find(|(caption, _)| caption.contains("license"))
            .unwrap();
        assert_eq!(caption, "Properties for the license object");
        assert_eq!(rows[0].requirement, Requirement::Required);

        let sections: Vec<_> = document.sections().collect();
        assert!(sections.contains(&("sec-choice-1", Some("License"))));
        assert!(sections.contains(&("sec-choice-id", Some("License ID"))));
        assert!(document.is_balanced());
    }

    #[test]
    fn test_missing_combinator_is_fatal() {
        let root = schema(json!({ "type": "object" }));
        let options = GeneratorOptions::default();
        let mut traversal = Traversal::new(&root, &options, ReferenceTable::empty());
        let site = traversal.resolve(&root, &Breadcrumb::root());
        let err = traversal
            .complex(&site, ComplexType::AnyOf, None, &Breadcrumb::root())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCombinator {
                combinator: "anyOf",
                ..
            }
        ));
    }

    #[test]
    fn test_array_option_recurses_at_shared_breadcrumb() {
        let document = generate(&schema(json!({
            "type": "object",
            "properties": {
                "value": {
                    "title": "Value",
                    "anyOf": [
                        { "type": "string", "title": "Single" },
                        {
                            "type": "array",
                            "title": "Several",
                            "items": { "type": "string" }
                        }
                    ]
                }
            }
        })))
        .unwrap();

        let types: Vec<_> = document.paragraphs("Type").collect();
        assert!(types.contains(&"Array (of String)"));
        assert!(document.ops.contains(&DocOp::Note {
            text: "Shall be any of:".to_string()
        }));
    }
}
