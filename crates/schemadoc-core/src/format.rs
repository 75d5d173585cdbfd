//! Normative descriptions for the JSON Schema `format` keyword
//!
//! The table is closed: a format missing here is a configuration error, not
//! something to render verbatim.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

/// Supported formats and their prose
pub const FORMAT_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "date-time",
        "date-time as specified in [RFC 3339 section 5.6](https://www.ietf.org/rfc/rfc3339.html#section-5.6)",
    ),
    (
        "time",
        "time as specified in [RFC 3339 section 5.6](https://www.ietf.org/rfc/rfc3339.html#section-5.6)",
    ),
    (
        "date",
        "date as specified in [RFC 3339 section 5.6](https://www.ietf.org/rfc/rfc3339.html#section-5.6)",
    ),
    (
        "email",
        "email address as specified in [RFC 5321, section 4.1.2](https://www.ietf.org/rfc/rfc5321.html#section-4.1.2)",
    ),
    (
        "idn-email",
        "idn-email address as specified in [RFC 6531](https://www.ietf.org/rfc/rfc6531.html)",
    ),
    ("uri", "uri as specified in [RFC 3986](https://www.ietf.org/rfc/rfc3986.html)"),
    (
        "uri-reference",
        "uri-reference as specified in [RFC 3986](https://www.ietf.org/rfc/rfc3986.html#section-4.1)",
    ),
    ("iri", "iri as specified in [RFC 3987](https://www.ietf.org/rfc/rfc3987.html)"),
    (
        "iri-reference",
        "iri-reference as specified in [RFC 3987](https://www.ietf.org/rfc/rfc3987.html)",
    ),
    (
        "regex",
        "a regular expression, which should be valid according to the [ECMA 262](https://www.ecma-international.org/publications-and-standards/standards/ecma-262/) dialect",
    ),
];

/// Prose for a format keyword, or `None` when unsupported
pub fn describe(format: &str) -> Option<&'static str> {
    FORMAT_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == format)
        .map(|(_, description)| *description)
}

/// Whether the format is part of the closed table
pub fn is_supported(format: &str) -> bool {
    describe(format).is_some()
}
