//! Selector Matching
//!
//! Compound selectors only: an optional tag followed by any number of
//! `#id`, `.class`, `[attr]` and `[attr="value"]` parts. Combinators and
//! pseudo-classes are rejected.

use crate::HookError;

/// Parsed compound selector
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, Option<String>)>,
}

/// What an element exposes for matching
pub struct Subject<'a> {
    pub tag: &'a str,
    pub classes: &'a [String],
    pub attribute: &'a dyn Fn(&str) -> Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, HookError> {
        let invalid = || HookError::InvalidSelector(input.to_string());
        let source = input.trim();
        if source.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();
        let tag_end = source.find(['#', '.', '[']).unwrap_or(source.len());
        let tag = &source[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_ident(tag) {
                return Err(invalid());
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &source[tag_end..];
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('#') {
                let end = after.find(['#', '.', '[']).unwrap_or(after.len());
                let id = &after[..end];
                if !is_ident(id) {
                    return Err(invalid());
                }
                selector.attributes.push(("id".to_string(), Some(id.to_string())));
                rest = &after[end..];
            } else if let Some(after) = rest.strip_prefix('.') {
                let end = after.find(['#', '.', '[']).unwrap_or(after.len());
                let class = &after[..end];
                if !is_ident(class) {
                    return Err(invalid());
                }
                selector.classes.push(class.to_string());
                rest = &after[end..];
            } else if let Some(after) = rest.strip_prefix('[') {
                let end = after.find(']').ok_or_else(invalid)?;
                let body = &after[..end];
                let (name, value) = match body.split_once('=') {
                    Some((name, value)) => (name.trim(), Some(unquote(value.trim()).to_string())),
                    None => (body.trim(), None),
                };
                if !is_ident(name) {
                    return Err(invalid());
                }
                selector.attributes.push((name.to_string(), value));
                rest = &after[end + 1..];
            } else {
                return Err(invalid());
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, subject: &Subject<'_>) -> bool {
        if let Some(tag) = &self.tag {
            if !subject.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| subject.classes.contains(c)) {
            return false;
        }
        self.attributes.iter().all(|(name, expected)| {
            match ((subject.attribute)(name), expected) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == *expected,
            }
        })
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}
