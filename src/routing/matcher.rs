//! Route matching module
//!
//! Paths are matched against ordered templates; the first template matching
//! the full path wins. A template mixes literal text with two capture forms:
//! `(text)` matches `text` exactly and captures it, and a trailing `{name}`
//! captures the remainder of the path, empty included.

use std::str::Chars;

use thiserror::Error;

/// Rejected route template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unclosed `(` in route template `{0}`")]
    UnclosedParen(String),
    #[error("unclosed `{{` in route template `{0}`")]
    UnclosedBrace(String),
    #[error("rest capture `{{{0}}}` must end its route template")]
    RestNotLast(String),
}

#[derive(Debug)]
enum Part {
    Literal(String),
    CaptureLiteral(String),
    CaptureRest,
}

/// A parsed path template.
#[derive(Debug)]
pub struct Pattern {
    parts: Vec<Part>,
}

impl Pattern {
    /// Parse a route template into matchable parts.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            match c {
                '(' => {
                    flush_literal(&mut literal, &mut parts);
                    let text = take_until(&mut chars, ')')
                        .ok_or_else(|| PatternError::UnclosedParen(template.to_string()))?;
                    parts.push(Part::CaptureLiteral(text));
                }
                '{' => {
                    flush_literal(&mut literal, &mut parts);
                    let name = take_until(&mut chars, '}')
                        .ok_or_else(|| PatternError::UnclosedBrace(template.to_string()))?;
                    if chars.next().is_some() {
                        return Err(PatternError::RestNotLast(name));
                    }
                    parts.push(Part::CaptureRest);
                }
                _ => literal.push(c),
            }
        }
        flush_literal(&mut literal, &mut parts);

        Ok(Self { parts })
    }

    /// Match a full path against this pattern, yielding captures in
    /// template order. `None` when any part fails or trailing path is left.
    pub fn matches<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let mut remaining = path;
        let mut captures = Vec::new();

        for part in &self.parts {
            match part {
                Part::Literal(text) => {
                    remaining = remaining.strip_prefix(text.as_str())?;
                }
                Part::CaptureLiteral(text) => {
                    let rest = remaining.strip_prefix(text.as_str())?;
                    captures.push(&remaining[..text.len()]);
                    remaining = rest;
                }
                Part::CaptureRest => {
                    captures.push(remaining);
                    remaining = "";
                }
            }
        }

        remaining.is_empty().then_some(captures)
    }
}

fn flush_literal(literal: &mut String, parts: &mut Vec<Part>) {
    if !literal.is_empty() {
        parts.push(Part::Literal(std::mem::take(literal)));
    }
}

fn take_until(chars: &mut Chars<'_>, closing: char) -> Option<String> {
    let mut text = String::new();
    for c in chars.by_ref() {
        if c == closing {
            return Some(text);
        }
        text.push(c);
    }
    None
}

/// Handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Index,
    Image,
}

/// An immutable (pattern, handler) pair.
#[derive(Debug)]
pub struct Route {
    pattern: Pattern,
    target: RouteTarget,
}

impl Route {
    /// Parse `template` and bind it to a handler target.
    pub fn new(template: &str, target: RouteTarget) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: Pattern::parse(template)?,
            target,
        })
    }
}

/// Find the first route whose pattern matches the path.
pub fn dispatch<'p>(path: &'p str, routes: &[Route]) -> Option<(RouteTarget, Vec<&'p str>)> {
    routes.iter().find_map(|route| {
        route
            .pattern
            .matches(path)
            .map(|captures| (route.target, captures))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(template: &str) -> Pattern {
        Pattern::parse(template).unwrap()
    }

    #[test]
    fn test_literal_template_is_anchored() {
        let root = pattern("/");
        assert_eq!(root.matches("/"), Some(vec![]));
        assert_eq!(root.matches("/index"), None);
        assert_eq!(root.matches(""), None);
    }

    #[test]
    fn test_capture_groups_bind_positionally() {
        let image = pattern("/(svg)/{file}");
        assert_eq!(
            image.matches("/svg/graph.dot"),
            Some(vec!["svg", "graph.dot"])
        );
        assert_eq!(image.matches("/svg/"), Some(vec!["svg", ""]));
        assert_eq!(
            image.matches("/svg/sub/graph.dot"),
            Some(vec!["svg", "sub/graph.dot"])
        );
        assert_eq!(image.matches("/svg"), None);
        assert_eq!(image.matches("/png/graph.dot"), None);
    }

    #[test]
    fn test_unclosed_groups_are_rejected() {
        assert_eq!(
            Pattern::parse("/(svg/{file}").unwrap_err(),
            PatternError::UnclosedParen("/(svg/{file}".to_string())
        );
        assert_eq!(
            Pattern::parse("/{file").unwrap_err(),
            PatternError::UnclosedBrace("/{file".to_string())
        );
    }

    #[test]
    fn test_rest_capture_must_be_last() {
        assert_eq!(
            Pattern::parse("/{dir}/index").unwrap_err(),
            PatternError::RestNotLast("dir".to_string())
        );
    }

    #[test]
    fn test_first_match_wins_over_later_routes() {
        let routes = vec![
            Route::new("/(svg)/{file}", RouteTarget::Image).unwrap(),
            Route::new("/{anything}", RouteTarget::Index).unwrap(),
        ];

        let (target, captures) = dispatch("/svg/g.dot", &routes).unwrap();
        assert_eq!(target, RouteTarget::Image);
        assert_eq!(captures, vec!["svg", "g.dot"]);

        // Same path, reversed order: the catch-all fires first
        let routes: Vec<Route> = routes.into_iter().rev().collect();
        let (target, captures) = dispatch("/svg/g.dot", &routes).unwrap();
        assert_eq!(target, RouteTarget::Index);
        assert_eq!(captures, vec!["svg/g.dot"]);
    }

    #[test]
    fn test_no_route_matches() {
        let routes = vec![
            Route::new("/", RouteTarget::Index).unwrap(),
            Route::new("/(svg)/{file}", RouteTarget::Image).unwrap(),
        ];
        assert!(dispatch("/pdf/g.dot", &routes).is_none());
        assert!(dispatch("/svg", &routes).is_none());
    }
}
