//! Variable signature parsing.
//!
//! Only the simple single-line form `query Name($a: Int, $b: String!) {`
//! is recognized: the first parenthesized group of the query is split on
//! `$` and the text before each `:` becomes a variable name. Nested or
//! multi-line parameter lists are not understood.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer, ser::SerializeMap};

static PARAMETER_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Declared variable names in first-declaration order.
///
/// Serializes as a JSON object mapping every name to an empty string, which
/// is the placeholder the API client shows for the user to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    names: Vec<String>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Serialize for VariableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for name in self.names() {
            map.serialize_entry(name, "")?;
        }
        map.end()
    }
}

/// Collect the variables declared by a query.
///
/// Returns an empty map when the query's first line has no `(`, and also when
/// it has one but no non-empty `(...)` group follows anywhere in the text.
pub fn parse_variables(query: &str) -> VariableMap {
    let mut variables = VariableMap::new();

    let first_line = query.lines().next().unwrap_or_default();
    if !first_line.contains('(') {
        return variables;
    }

    let Some(group) = PARAMETER_GROUP_REGEX
        .captures(query)
        .and_then(|caps| caps.get(1))
    else {
        return variables;
    };

    for declaration in group.as_str().split('$').skip(1) {
        let name = declaration.trim().split(':').next().unwrap_or_default();
        variables.insert(name);
    }

    variables
}
