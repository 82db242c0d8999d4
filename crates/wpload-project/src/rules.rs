use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Where in a package's metadata namespace rules are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleChannel {
    /// `autoload.wordpress` / `autoload-dev.wordpress`
    Standard,
    /// `extra.wordpress-autoloader.autoload` / `.autoload-dev`
    Extra,
}

impl RuleChannel {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Extra];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "autoload",
            Self::Extra => "extra",
        }
    }
}

impl fmt::Display for RuleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleShapeError {
    pub found: &'static str,
}

impl fmt::Display for RuleShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected an object of namespace rules, found {}", self.found)
    }
}

impl std::error::Error for RuleShapeError {}

/// Validated `namespace -> [path, ...]` declarations of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDeclaration {
    rules: IndexMap<String, Vec<String>>,
}

impl RuleDeclaration {
    /// Parse a raw rule block. The block must be an object; each value may
    /// be a single path or a list of paths. Entries that are neither are
    /// dropped.
    pub fn parse(block: &Value) -> Result<Self, RuleShapeError> {
        let Value::Object(map) = block else {
            return Err(RuleShapeError {
                found: kind_of(block),
            });
        };

        let rules = map
            .iter()
            .filter_map(|(namespace, paths)| {
                parse_paths(paths).map(|paths| (namespace.clone(), paths))
            })
            .collect();

        Ok(Self { rules })
    }

    /// Append `other`'s paths after ours, namespace by namespace.
    pub fn merge(&mut self, other: Self) {
        for (namespace, paths) in other.rules {
            self.rules.entry(namespace).or_default().extend(paths);
        }
    }

    #[must_use]
    pub fn paths(&self, namespace: &str) -> Option<&[String]> {
        self.rules.get(namespace).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn parse_paths(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(path_string).collect()),
        other => path_string(other).map(|path| vec![path]),
    }
}

fn path_string(value: &Value) -> Option<String> {
    match value {
        Value::String(path) => Some(path.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
