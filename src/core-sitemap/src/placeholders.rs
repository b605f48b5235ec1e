//! Route path placeholders: `<name>` and `<name:type>`.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w+)(?::(\w+))?>").expect("placeholder pattern is a valid regex"));

/// One placeholder token from a route's path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    token: String,
    name: String,
}

impl Placeholder {
    /// Parses a raw token such as `<item>` or `<user_id:int>`.
    /// Returns `None` if the text is not a single placeholder.
    pub fn parse(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('<')?.strip_suffix('>')?;
        // The type suffix only constrains matching; links are built from the name alone.
        let name = match inner.split_once(':') {
            Some((name, filter)) if !filter.is_empty() => name,
            Some(_) => return None,
            None => inner,
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            name: name.to_string(),
        })
    }

    /// The placeholder exactly as written in the path pattern.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The parameter name used to look up a resource record.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All placeholder tokens in `path`, in order of appearance. Duplicates are kept.
pub fn extract_placeholders(path: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .find_iter(path)
        .filter_map(|m| Placeholder::parse(m.as_str()))
        .collect()
}

/// Rewrites placeholders into axum's capture syntax: `/hello/<id:int>` -> `/hello/{id}`.
pub fn to_axum_path(path: &str) -> String {
    PLACEHOLDER.replace_all(path, "{${1}}").into_owned()
}

/// Why a path pattern cannot be served by the router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("path must start with '/'")]
    MissingLeadingSlash,

    #[error("'{{' and '}}' are reserved")]
    ReservedBrace,

    #[error("placeholder must fill the whole segment: {0}")]
    PartialSegment(String),
}

/// Checks that `path` can be registered: it starts with `/` and every placeholder is a
/// segment of its own (`/files/<name>` is fine, `/files/<name>.xml` is not).
pub fn check_pattern(path: &str) -> Result<(), PatternError> {
    if !path.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash);
    }
    if path.contains(['{', '}']) {
        return Err(PatternError::ReservedBrace);
    }
    match path.split('/').find(|segment| is_partial(segment)) {
        Some(segment) => Err(PatternError::PartialSegment(segment.to_string())),
        None => Ok(()),
    }
}

fn is_partial(segment: &str) -> bool {
    PLACEHOLDER
        .find(segment)
        .is_some_and(|m| m.start() != 0 || m.end() != segment.len())
}

/// True if the router cannot hold both patterns: after a shared prefix of identical segments
/// they capture the same segment under different names, e.g. `/a/<id>` and `/a/<name>`.
pub fn captures_collide(a: &str, b: &str) -> bool {
    let (a, b) = (to_axum_path(a), to_axum_path(b));
    for (left, right) in a.split('/').zip(b.split('/')) {
        if left == right {
            continue;
        }
        return is_capture(left) && is_capture(right);
    }
    false
}

fn is_capture(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// How a route turns into sitemap links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteShape {
    /// No placeholders: exactly one link.
    Static,
    /// One link per resource record, filling in these placeholders.
    Dynamic(Vec<Placeholder>),
}

impl RouteShape {
    pub fn classify(path: &str) -> Self {
        let placeholders = extract_placeholders(path);
        if placeholders.is_empty() {
            RouteShape::Static
        } else {
            RouteShape::Dynamic(placeholders)
        }
    }
}
