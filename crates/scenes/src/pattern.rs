//! Route pattern compilation and matching
//!
//! Patterns are compiled once at table build time; matching allocates only
//! for captured parameter values.

use crate::error::{Result, SceneError};

/// Parameter values captured from a matched path, in pattern order
pub type PathParams = Vec<(String, String)>;

/// A compiled route pattern
///
/// Built from strings like `/experiments/:id/metrics/:metric` or
/// `/providers/new/*`. Three segment kinds: literals, `:param` captures, and
/// a single trailing `*` that swallows the rest of the path (possibly
/// nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_wildcard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl RoutePattern {
    /// Compile a pattern string
    pub fn compile(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| SceneError::invalid_pattern(pattern, reason);

        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        let mut trailing_wildcard = false;

        if !rest.is_empty() {
            let parts: Vec<&str> = rest.split('/').collect();
            for (i, part) in parts.iter().enumerate() {
                match *part {
                    "" => return Err(invalid("empty segment")),
                    "*" => {
                        if i != parts.len() - 1 {
                            return Err(invalid("'*' must be the last segment"));
                        }
                        trailing_wildcard = true;
                    }
                    p if p.starts_with(':') => {
                        let name = &p[1..];
                        if name.is_empty() {
                            return Err(invalid("parameter needs a name"));
                        }
                        if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                            return Err(invalid("duplicate parameter name"));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    p => segments.push(Segment::Literal(p.to_string())),
                }
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            trailing_wildcard,
        })
    }

    /// The original pattern string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters this pattern captures, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a path against this pattern, capturing parameters
    ///
    /// Trailing slashes are ignored (`/experiments/` matches
    /// `/experiments`). Returns `None` on any mismatch.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if self.trailing_wildcard {
            if parts.len() < self.segments.len() {
                return None;
            }
        } else if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push((name.clone(), (*part).to_string()));
                }
            }
        }

        Some(params)
    }
}
