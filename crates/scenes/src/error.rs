//! Scene table error types

use thiserror::Error;

/// Result type for scene table operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while compiling a scene table
#[derive(Debug, Error)]
pub enum SceneError {
    /// Route or redirect references an unregistered scene
    #[error("unknown scene '{key}' in route table")]
    UnknownScene {
        /// Key of the missing scene
        key: String,
    },

    /// Scene key registered more than once
    #[error("scene '{key}' registered twice")]
    DuplicateScene {
        /// Key registered twice
        key: String,
    },

    /// Two routes share the same pattern
    #[error("duplicate route pattern '{pattern}'")]
    DuplicateRoute {
        /// Pattern that appears twice
        pattern: String,
    },

    /// Pattern string failed to compile
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// What went wrong
        reason: String,
    },

    /// Redirect target references a parameter its pattern does not capture
    #[error("redirect target '{target}' uses unbound parameter ':{param}'")]
    UnboundRedirectParam {
        /// Redirect target
        target: String,
        /// Parameter missing from the source pattern
        param: String,
    },
}

impl SceneError {
    /// Create an UnknownScene error
    #[inline]
    pub fn unknown_scene(key: impl Into<String>) -> Self {
        Self::UnknownScene { key: key.into() }
    }

    /// Create a DuplicateScene error
    #[inline]
    pub fn duplicate_scene(key: impl Into<String>) -> Self {
        Self::DuplicateScene { key: key.into() }
    }

    /// Create a DuplicateRoute error
    #[inline]
    pub fn duplicate_route(pattern: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            pattern: pattern.into(),
        }
    }

    /// Create an InvalidPattern error
    #[inline]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
