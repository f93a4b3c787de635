//! Property filter conditions
//!
//! Property filters narrow a series to matching events or persons. The query
//! layer carries them opaquely; semantic validation (does the property exist,
//! is the value well typed) is the executor's responsibility.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// A single property condition on a query series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Property key to filter on
    pub key: String,
    /// Operator for comparison
    pub operator: PropertyOperator,
    /// Value(s) to compare against
    pub value: PropertyValue,
    /// Whether the property lives on the event or the person
    #[serde(default)]
    pub scope: PropertyScope,
}

impl PropertyFilter {
    /// Create an equality condition
    pub fn exact(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::Exact,
            value: PropertyValue::Single(value.into()),
            scope: PropertyScope::Event,
        }
    }

    /// Create a not-equal condition
    pub fn is_not(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::IsNot,
            value: PropertyValue::Single(value.into()),
            scope: PropertyScope::Event,
        }
    }

    /// Create a contains condition
    pub fn contains(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::Contains,
            value: PropertyValue::Single(value.into()),
            scope: PropertyScope::Event,
        }
    }

    /// Create a one-of condition
    pub fn one_of(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::Exact,
            value: PropertyValue::Multiple(values),
            scope: PropertyScope::Event,
        }
    }

    /// Create an is_set condition (property present)
    pub fn is_set(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::IsSet,
            value: PropertyValue::None,
            scope: PropertyScope::Event,
        }
    }

    /// Create an is_not_set condition (property absent)
    pub fn is_not_set(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: PropertyOperator::IsNotSet,
            value: PropertyValue::None,
            scope: PropertyScope::Event,
        }
    }

    /// Rescope this filter to person properties
    pub fn on_person(mut self) -> Self {
        self.scope = PropertyScope::Person;
        self
    }
}

/// Property comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyOperator {
    /// Equal
    Exact,
    /// Not equal
    IsNot,
    /// Contains substring
    Contains,
    /// Does not contain substring
    NotContains,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Property is present
    IsSet,
    /// Property is absent
    IsNotSet,
    /// Regex match
    Regex,
}

impl PropertyOperator {
    /// Parse an operator from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "eq" | "=" | "==" => Ok(Self::Exact),
            "is_not" | "ne" | "!=" => Ok(Self::IsNot),
            "contains" | "icontains" => Ok(Self::Contains),
            "not_contains" | "not_icontains" => Ok(Self::NotContains),
            "gt" | ">" => Ok(Self::Gt),
            "gte" | ">=" => Ok(Self::Gte),
            "lt" | "<" => Ok(Self::Lt),
            "lte" | "<=" => Ok(Self::Lte),
            "is_set" => Ok(Self::IsSet),
            "is_not_set" => Ok(Self::IsNotSet),
            "regex" | "~" => Ok(Self::Regex),
            _ => Err(QueryError::InvalidOperator(s.to_string())),
        }
    }
}

/// Property filter value (none, single, or multiple)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// No value (for is_set/is_not_set)
    None,
    /// Single value
    Single(String),
    /// Multiple values (any-of semantics)
    Multiple(Vec<String>),
}

/// Where a property is looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyScope {
    /// Event property
    #[default]
    Event,
    /// Person property
    Person,
}
