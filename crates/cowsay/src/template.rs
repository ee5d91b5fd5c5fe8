//! Cowfile parsing.
//!
//! A cowfile wraps the ASCII art in a small envelope: an optional header of
//! comments and variable assignments, then a heredoc block
//!
//! ```text
//! $the_cow = <<"EOC";
//!         $thoughts   ^__^
//!          $thoughts  ($eyes)\\_______
//! EOC
//! ```
//!
//! Parsing happens in two phases. The envelope is stripped line by line, then
//! the block body is scanned for the fixed placeholder set. Nothing in the
//! body is ever evaluated.
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{face::Face, CowError, Result};

static OPENING_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*\$the_cow\s*=\s*<<\s*(?:"(\w+)"|'(\w+)'|(\w+))\s*;?"#)
        .expect("opening marker regex")
});

static HEADER_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*\$(\w+)\s*=\s*(?:\$\{?(\w+)\}?|"([^"]*)"|'([^']*)')\s*;\s*(?:#.*)?$"#,
    )
    .expect("header assignment regex")
});

/// Named substitution points in an art body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Eyes,
    Tongue,
    Thoughts,
}

impl Placeholder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eyes" => Some(Placeholder::Eyes),
            "tongue" => Some(Placeholder::Tongue),
            "thoughts" => Some(Placeholder::Thoughts),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Eyes => "eyes",
            Placeholder::Tongue => "tongue",
            Placeholder::Thoughts => "thoughts",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtPart {
    /// Literal art, escapes already resolved.
    Text(String),
    Placeholder(Placeholder),
}

/// Literal ASCII art with its placeholders still unsubstituted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtBody {
    parts: Vec<ArtPart>,
}

impl ArtBody {
    pub fn parts(&self) -> &[ArtPart] {
        &self.parts
    }

    /// Distinct placeholders occurring in the body.
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                ArtPart::Placeholder(ph) => Some(*ph),
                ArtPart::Text(_) => None,
            })
            .collect()
    }

    /// Substitutes every placeholder. Inserted values are never re-scanned.
    pub fn render(&self, face: &Face, thoughts: &str) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                ArtPart::Text(text) => out.push_str(text),
                ArtPart::Placeholder(Placeholder::Eyes) => out.push_str(face.eyes()),
                ArtPart::Placeholder(Placeholder::Tongue) => out.push_str(face.tongue()),
                ArtPart::Placeholder(Placeholder::Thoughts) => out.push_str(thoughts),
            }
        }
        out
    }

    fn push_text(&mut self, text: &mut String) {
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(ArtPart::Text(prev)) => prev.push_str(text),
            _ => self.parts.push(ArtPart::Text(text.clone())),
        }
        text.clear();
    }
}

/// Writes the body back in heredoc syntax: placeholders as `${name}`, literal
/// `\` and `$` escaped. The output parses to the same parts again inside an
/// interpolating block (`<<EOC` or `<<"EOC"`).
impl fmt::Display for ArtBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                ArtPart::Text(text) => {
                    for ch in text.chars() {
                        if matches!(ch, '\\' | '$') {
                            f.write_str("\\")?;
                        }
                        write!(f, "{ch}")?;
                    }
                }
                ArtPart::Placeholder(ph) => write!(f, "${{{}}}", ph.name())?,
            }
        }
        Ok(())
    }
}

/// Raw cowfile content as loaded from disk, an archive or the bundled set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateResource {
    pub name: String,
    pub content: String,
}

impl TemplateResource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn parse(&self) -> Result<CowTemplate> {
        CowTemplate::parse(&self.name, &self.content)
    }
}

#[derive(Clone, Debug)]
pub struct CowTemplate {
    pub name: String,
    pub body: ArtBody,
}

impl CowTemplate {
    pub fn parse(name: &str, raw: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            body: extract(name, raw)?,
        })
    }
}

/// Variables defined in the cowfile header.
#[derive(Default)]
struct Header {
    aliases: HashMap<String, Placeholder>,
    literals: HashMap<String, String>,
}

impl Header {
    fn parse(lines: &[&str]) -> Self {
        let mut header = Header::default();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some(caps) = HEADER_ASSIGNMENT.captures(trimmed) else {
                log::debug!("ignoring cowfile header line: {trimmed}");
                continue;
            };
            let var = caps[1].to_string();
            if let Some(target) = caps.get(2) {
                match Placeholder::from_name(target.as_str()) {
                    Some(ph) => {
                        header.literals.remove(&var);
                        header.aliases.insert(var, ph);
                    }
                    None => log::debug!("ignoring assignment from unknown ${}", target.as_str()),
                }
            } else if let Some(value) = caps.get(3).or_else(|| caps.get(4)) {
                header.aliases.remove(&var);
                header.literals.insert(var, value.as_str().to_string());
            }
        }
        header
    }

    fn resolve(&self, name: &str) -> Option<Variable<'_>> {
        if let Some(value) = self.literals.get(name) {
            return Some(Variable::Literal(value));
        }
        self.aliases
            .get(name)
            .copied()
            .or_else(|| Placeholder::from_name(name))
            .map(Variable::Placeholder)
    }
}

enum Variable<'a> {
    Placeholder(Placeholder),
    Literal(&'a str),
}

/// Extracts the art body from a raw cowfile.
///
/// `name` is only used for error context. Fails with
/// [`CowError::UnterminatedBlock`] if the opening or closing heredoc marker is
/// missing. The text between the markers is kept verbatim, including leading
/// and trailing blank lines.
pub fn extract(name: &str, raw: &str) -> Result<ArtBody> {
    let mut offset = 0;
    let mut header_lines = Vec::new();
    let mut opening = None;
    for line in raw.split_inclusive('\n') {
        offset += line.len();
        if let Some(caps) = OPENING_MARKER.captures(line) {
            let interpolate = caps.get(2).is_none();
            let marker = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            opening = Some((marker, interpolate));
            break;
        }
        header_lines.push(line);
    }
    let Some((marker, interpolate)) = opening else {
        return Err(CowError::UnterminatedBlock {
            name: name.to_string(),
            marker: "missing opening marker".into(),
        });
    };

    let start = offset;
    let mut end = None;
    for line in raw[start..].split_inclusive('\n') {
        if line.trim_end() == marker {
            end = Some(offset);
            break;
        }
        offset += line.len();
    }
    let Some(end) = end else {
        return Err(CowError::UnterminatedBlock {
            name: name.to_string(),
            marker: format!("missing closing marker {marker}"),
        });
    };

    let header = Header::parse(&header_lines);
    Ok(scan_body(&raw[start..end], &header, interpolate))
}

fn scan_body(body: &str, header: &Header, interpolate: bool) -> ArtBody {
    let mut art = ArtBody::default();
    let mut text = String::new();
    let mut rest = body;
    while let Some(ch) = rest.chars().next() {
        rest = &rest[ch.len_utf8()..];
        match ch {
            '\\' if interpolate => match rest.chars().next() {
                Some(escaped @ ('\\' | '$' | '@')) => {
                    text.push(escaped);
                    rest = &rest[1..];
                }
                _ => text.push('\\'),
            },
            '$' => match scan_variable(rest) {
                Some((name, len)) => {
                    match header.resolve(name) {
                        Some(Variable::Placeholder(ph)) => {
                            art.push_text(&mut text);
                            art.parts.push(ArtPart::Placeholder(ph));
                        }
                        Some(Variable::Literal(value)) => text.push_str(value),
                        None => {
                            // Unknown variables are rendered literally.
                            text.push('$');
                            text.push_str(&rest[..len]);
                        }
                    }
                    rest = &rest[len..];
                }
                None => text.push('$'),
            },
            _ => text.push(ch),
        }
    }
    art.push_text(&mut text);
    art
}

/// Reads a variable name after `$`, either `name` or `{name}`.
///
/// Returns the name and the number of bytes consumed.
fn scan_variable(rest: &str) -> Option<(&str, usize)> {
    let is_start = |c: char| c.is_ascii_alphabetic() || c == '_';
    let ident_len = |s: &str| {
        s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(s.len())
    };
    if let Some(inner) = rest.strip_prefix('{') {
        let len = ident_len(inner);
        if len > 0 && inner.starts_with(is_start) && inner[len..].starts_with('}') {
            return Some((&inner[..len], len + 2));
        }
        return None;
    }
    if !rest.starts_with(is_start) {
        return None;
    }
    let len = ident_len(rest);
    Some((&rest[..len], len))
}
