//! A small Mustache subset: plain variables, unescaped variables and comments.
//!
//! Entry templates are GtkBuilder XML, so `{{var}}` escapes for markup and
//! `{{{var}}}` or `{{& var}}` inserts the value as is. Sections, partials and
//! delimiter changes are rejected at parse time.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("tag opened at byte {0} is never closed")]
    Unclosed(usize),
    #[error("empty tag at byte {0}")]
    EmptyTag(usize),
    #[error("unsupported tag `{tag}` at byte {offset}")]
    UnsupportedTag { tag: String, offset: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Escaped(String),
    Raw(String),
}

/// A template parsed once and rendered any number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_owned()));
            }
            let tag_offset = offset + start;
            let tag = &rest[start..];

            let consumed = if tag.starts_with("{{{") {
                let end = tag.find("}}}").ok_or(TemplateError::Unclosed(tag_offset))?;
                let name = tag[3..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyTag(tag_offset));
                }
                segments.push(Segment::Raw(name.to_owned()));
                end + 3
            } else {
                let end = tag.find("}}").ok_or(TemplateError::Unclosed(tag_offset))?;
                if let Some(segment) = parse_tag(&tag[2..end], tag_offset)? {
                    segments.push(segment);
                }
                end + 2
            };

            offset = tag_offset + consumed;
            rest = &tag[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_owned()));
        }

        Ok(Template { segments })
    }

    /// Renders with the given variables. Unknown names render as nothing.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Escaped(name) => escape_into(&mut out, lookup(vars, name)),
                Segment::Raw(name) => out.push_str(lookup(vars, name)),
            }
        }
        out
    }
}

fn lookup<'a>(vars: &[(&str, &'a str)], name: &str) -> &'a str {
    vars.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .unwrap_or_default()
}

fn parse_tag(inner: &str, offset: usize) -> Result<Option<Segment>, TemplateError> {
    let inner = inner.trim();
    let mut chars = inner.chars();
    let segment = match chars.next() {
        None => return Err(TemplateError::EmptyTag(offset)),
        Some('!') => return Ok(None),
        Some('&') => Segment::Raw(chars.as_str().trim().to_owned()),
        Some('#' | '^' | '/' | '>' | '=' | '{') => {
            return Err(TemplateError::UnsupportedTag {
                tag: inner.to_owned(),
                offset,
            })
        }
        Some(_) => Segment::Escaped(inner.to_owned()),
    };

    match &segment {
        Segment::Raw(name) if name.is_empty() => Err(TemplateError::EmptyTag(offset)),
        _ => Ok(Some(segment)),
    }
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
