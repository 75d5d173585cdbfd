//! Normative text normalization
//!
//! [`translate`] rewrites free text in four ordered steps:
//!
//! 1. RFC-style normative keywords become the lower-case normative dialect
//!    (`MUST NOT` -> `shall not`, `SHOULD` -> `should`, ...)
//! 2. placeholder delimiters already present in the input, technical terms,
//!    URLs, email addresses and inline code spans are replaced by
//!    placeholders, in that order
//! 3. spelling variants are substituted whole-word, case-insensitively,
//!    keeping the capitalization pattern of the original token
//! 4. placeholders are restored in a single pass
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Normative keyword rewrites, in priority order
pub const NORMATIVE_REWRITES: &[(&str, &str)] = &[
    ("MUST NOT", "shall not"),
    ("Must not", "Shall not"),
    ("must not", "shall not"),
    ("SHALL NOT", "shall not"),
    ("SHOULD NOT", "should not"),
    ("NOT RECOMMENDED", "not recommended"),
    ("MUST", "shall"),
    ("Must", "Shall"),
    ("must", "shall"),
    ("SHALL", "shall"),
    ("SHOULD", "should"),
    ("REQUIRED", "required"),
    ("RECOMMENDED", "recommended"),
    ("MAY", "may"),
    ("OPTIONAL", "optional"),
];

/// Spelling variants mapped to the document dialect
pub const SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("practices", "practises"),
    ("license", "licence"),
    ("artifact", "artefact"),
    ("licensing", "licencing"),
    ("licenses", "licences"),
    ("behavior", "behaviour"),
    ("program", "programme"),
    ("disk", "disc"),
    ("modelled", "modeled"),
    ("install", "instal"),
    ("analyzes", "analyses"),
    ("labeled", "labelled"),
    ("labeling", "labelling"),
    ("tonnes", "tons"),
    ("gases", "gasses"),
    ("tunneling", "tunnelling"),
];

/// Technical terms that are never rewritten
pub const TECHNICAL_TERMS: &[&str] = &[
    "Artifact ID",
    "artifactId",
    "Group ID",
    "groupId",
    "License ID",
    "licenseId",
    "SPDX License Expression",
    "licenseChoice",
    "Package URL",
    "purl",
    "CycloneDX",
];

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

static NORMATIVE_REGEX: OnceLock<Regex> = OnceLock::new();
static TERM_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static SPELLING_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words
        .map(|word| {
            word.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn normative_regex() -> &'static Regex {
    NORMATIVE_REGEX.get_or_init(|| {
        let alternation = word_alternation(NORMATIVE_REWRITES.iter().map(|(from, _)| *from));
        Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("normative keyword pattern is valid")
    })
}

fn term_regex() -> &'static Regex {
    TERM_REGEX.get_or_init(|| {
        let alternation = word_alternation(TECHNICAL_TERMS.iter().copied());
        Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("technical term pattern is valid")
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r#"\b(?:https?|ftp)://[^\s<>"'`()\[\]]*[^\s<>"'`()\[\].,;:!?]"#)
            .expect("url pattern is valid")
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern is valid")
    })
}

fn code_regex() -> &'static Regex {
    CODE_REGEX.get_or_init(|| Regex::new(r"`[^`]+`").expect("code span pattern is valid"))
}

fn spelling_regex() -> &'static Regex {
    SPELLING_REGEX.get_or_init(|| {
        let alternation = word_alternation(SPELLING_VARIANTS.iter().map(|(from, _)| *from));
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("spelling pattern is valid")
    })
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn delimiter_regex() -> &'static Regex {
    DELIMITER_REGEX.get_or_init(|| {
        Regex::new(&format!("[{}{}]", PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE))
            .expect("delimiter pattern is valid")
    })
}

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(&format!("{}([0-9]+){}", PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE))
            .expect("placeholder pattern is valid")
    })
}

/// Normalize a free-text fragment into the document dialect
pub fn translate(text: &str) -> String {
    let rewritten = rewrite_normative(text);

    let mut spans = ProtectedSpans::default();
    let mut working = rewritten.into_owned();
    for pattern in [delimiter_regex(), term_regex(), url_regex(), email_regex(), code_regex()] {
        working = spans.protect(&working, pattern);
    }

    let substituted = substitute_spelling(&working);
    spans.restore(&substituted)
}

/// Step 1: normative keyword rewrites
pub fn rewrite_normative(text: &str) -> std::borrow::Cow<'_, str> {
    normative_regex().replace_all(text, |caps: &Captures| {
        let matched = whitespace_regex().replace_all(&caps[0], " ");
        NORMATIVE_REWRITES
            .iter()
            .find(|(from, _)| *from == matched)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// Step 3: dictionary substitution keeping the token's capitalization
pub fn substitute_spelling(text: &str) -> std::borrow::Cow<'_, str> {
    spelling_regex().replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        SPELLING_VARIANTS
            .iter()
            .find(|(from, _)| from.eq_ignore_ascii_case(matched))
            .map(|(_, to)| capitalize_like(to, matched))
            .unwrap_or_else(|| matched.to_string())
    })
}

/// Apply the capitalization pattern of `template` to `word`
///
/// All-caps stays all-caps, initial-caps stays initial-caps, anything else
/// becomes lower-case.
pub fn capitalize_like(word: &str, template: &str) -> String {
    if template == template.to_uppercase() {
        word.to_uppercase()
    } else if template.chars().next().is_some_and(char::is_uppercase) {
        crate::schema::sentence_case(word)
    } else {
        word.to_lowercase()
    }
}

/// Substrings lifted out of the text for the duration of one translation
#[derive(Debug, Default)]
struct ProtectedSpans {
    spans: Vec<String>,
}

impl ProtectedSpans {
    fn placeholder(index: usize) -> String {
        format!("{}{}{}", PLACEHOLDER_OPEN, index, PLACEHOLDER_CLOSE)
    }

    /// Replace every match of `pattern` with a placeholder
    fn protect(&mut self, text: &str, pattern: &Regex) -> String {
        pattern
            .replace_all(text, |caps: &Captures| {
                // A later span may swallow an earlier placeholder (a URL inside
                // a code span); store the fully expanded text.
                let original = expand(&self.spans, &caps[0]);
                self.spans.push(original);
                Self::placeholder(self.spans.len() - 1)
            })
            .into_owned()
    }

    /// Put every protected span back
    fn restore(&self, text: &str) -> String {
        expand(&self.spans, text)
    }
}

/// Replace placeholders with their spans
///
/// Stored spans are already fully expanded, so one pass suffices and
/// restored text is never scanned again.
fn expand(spans: &[String], text: &str) -> String {
    placeholder_regex()
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| spans.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_not_rewrite() {
        assert_eq!(translate("Consumers MUST NOT ignore this."), "Consumers shall not ignore this.");
    }

    #[test]
    fn test_keyword_rewrites() {
        assert_eq!(translate("Producers SHOULD include it."), "Producers should include it.");
        assert_eq!(translate("Tools MAY omit it."), "Tools may omit it.");
        assert_eq!(translate("It is NOT RECOMMENDED."), "It is not recommended.");
        assert_eq!(translate("It is RECOMMENDED."), "It is recommended.");
        assert_eq!(translate("Must be one of:"), "Shall be one of:");
        assert_eq!(translate("Must not be empty"), "Shall not be empty");
        assert_eq!(translate("the value must match"), "the value shall match");
        assert_eq!(translate("Values MUST  NOT repeat"), "Values shall not repeat");
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert_eq!(translate("MUSTARD and mustang"), "MUSTARD and mustang");
        assert_eq!(translate("DISMAYED"), "DISMAYED");
    }

    #[test]
    fn test_spelling_capitalization() {
        assert_eq!(translate("the license"), "the licence");
        assert_eq!(translate("License text"), "Licence text");
        assert_eq!(translate("LICENSE"), "LICENCE");
        assert_eq!(translate("multiple licenses apply"), "multiple licences apply");
        assert_eq!(translate("licensed"), "licensed");
    }

    #[test]
    fn test_technical_term_protected() {
        assert_eq!(translate("Artifact ID license"), "Artifact ID licence");
        assert_eq!(translate("an artifact"), "an artefact");
    }

    #[test]
    fn test_urls_emails_and_code_protected() {
        assert_eq!(
            translate("See https://example.com/license/program for the license."),
            "See https://example.com/license/program for the licence."
        );
        assert_eq!(
            translate("Mail license@example.org about the program."),
            "Mail license@example.org about the programme."
        );
        assert_eq!(translate("Set `license` to a program."), "Set `license` to a programme.");
    }

    #[test]
    fn test_nested_protection_restores_original() {
        let text = "Use `https://example.com/disk` for disk images.";
        assert_eq!(translate(text), "Use `https://example.com/disk` for disc images.");
    }

    #[test]
    fn test_markdown_link_url() {
        assert_eq!(
            translate("as specified in [RFC 3986](https://www.ietf.org/rfc/rfc3986.html)."),
            "as specified in [RFC 3986](https://www.ietf.org/rfc/rfc3986.html)."
        );
    }

    #[test]
    fn test_placeholder_lookalikes_survive() {
        let text = "Char \u{E000}0\u{E001} then https://example.com/x";
        assert_eq!(translate(text), text);

        let text = "\u{E001}\u{E000}1\u{E001}\u{E000} license";
        assert_eq!(translate(text), "\u{E001}\u{E000}1\u{E001}\u{E000} licence");
    }

    #[test]
    fn test_identity_on_plain_text() {
        let text = "The identifier of the component, unique within the document.";
        assert_eq!(translate(text), text);
    }

    #[test]
    fn test_capitalize_like() {
        assert_eq!(capitalize_like("licence", "LICENSE"), "LICENCE");
        assert_eq!(capitalize_like("licence", "License"), "Licence");
        assert_eq!(capitalize_like("licence", "liCense"), "licence");
    }
}
