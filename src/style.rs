//! Embedded handle stylesheet.
//!
//! The default geometry of the resize overlay and its handles ships as a
//! plain CSS asset. It is parsed once into a selector -> declarations table;
//! the resize setup clones a rule, overrides the handle thickness, and
//! stringifies it into inline style text.
//!
//! The parser understands the flat subset the asset uses: comments,
//! `selector { property: value; ... }` rules, and comma-separated selector
//! lists (only the first selector is kept). Malformed declarations are skipped.

use once_cell::sync::Lazy;
use std::fmt;

/// Raw text of the default stylesheet
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/handles.css");

/// The default stylesheet, parsed on first use
pub static DEFAULT_STYLE: Lazy<StyleSheet> = Lazy::new(|| StyleSheet::parse(DEFAULT_STYLESHEET));

/// Ordered `property: value` pairs of one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an existing property in place or append a new one.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Inline style text: one `property: value;` per line.
    pub fn to_style_text(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{p}: {v};\n"))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Declarations,
}

/// Parsed stylesheet, rules in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn parse(text: &str) -> Self {
        let text = strip_comments(text);
        let mut rules: Vec<StyleRule> = Vec::new();
        let mut rest = text.as_str();

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };

            let selector = rest[..open]
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            let declarations = parse_declarations(&rest[open + 1..close]);
            rest = &rest[close + 1..];

            if selector.is_empty() {
                continue;
            }
            // A repeated selector replaces the earlier rule
            match rules.iter_mut().find(|r| r.selector == selector) {
                Some(rule) => rule.declarations = declarations,
                None => rules.push(StyleRule {
                    selector,
                    declarations,
                }),
            }
        }

        Self { rules }
    }

    pub fn rule(&self, selector: &str) -> Option<&Declarations> {
        self.rules
            .iter()
            .find(|r| r.selector == selector)
            .map(|r| &r.declarations)
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{}{{\n{}}}\n", rule.selector, rule.declarations.to_style_text())?;
        }
        Ok(())
    }
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn parse_declarations(body: &str) -> Declarations {
    let mut declarations = Declarations::new();
    for item in body.split(';') {
        let Some((property, value)) = item.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        declarations.set(property, value);
    }
    declarations
}
