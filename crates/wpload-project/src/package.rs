use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::{RuleChannel, RuleDeclaration, RuleShapeError};
use wpload_constants::{
    AUTOLOAD_TYPE, EXTRA_AUTOLOAD, EXTRA_AUTOLOAD_DEV, EXTRA_KEY, METAPACKAGE_TYPE,
};

/// Package metadata as found in composer.json or installed.json.
///
/// The autoload and extra sections stay loosely typed: their shape is only
/// checked when rules are read, so one bad block never fails the whole load.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub autoload: Value,
    #[serde(rename = "autoload-dev", default, skip_serializing_if = "Value::is_null")]
    pub autoload_dev: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub extra: Value,
    #[serde(rename = "target-dir", skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub require: IndexMap<String, String>,
    #[serde(rename = "require-dev", default, skip_serializing_if = "IndexMap::is_empty")]
    pub require_dev: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub replace: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub provide: IndexMap<String, String>,
    #[serde(rename = "install-path", skip_serializing_if = "Option::is_none")]
    pub install_path: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub config: Value,
    // Catch-all for other fields to preserve them
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl Package {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Every name this package answers to: its own plus replaced and
    /// provided names, lowercased.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        std::iter::once(&self.name)
            .chain(self.replace.keys())
            .chain(self.provide.keys())
            .map(|name| name.to_lowercase())
            .collect()
    }

    /// The target-dir hint, ignoring an empty string.
    #[must_use]
    pub fn target_dir(&self) -> Option<&str> {
        self.target_dir.as_deref().filter(|dir| !dir.is_empty())
    }

    /// Raw rule block for a channel, `None` when absent or null.
    #[must_use]
    pub fn rule_block(&self, channel: RuleChannel, dev: bool) -> Option<&Value> {
        let block = match channel {
            RuleChannel::Standard => {
                let section = if dev { &self.autoload_dev } else { &self.autoload };
                section.get(AUTOLOAD_TYPE)
            }
            RuleChannel::Extra => {
                let key = if dev { EXTRA_AUTOLOAD_DEV } else { EXTRA_AUTOLOAD };
                self.extra.get(EXTRA_KEY).and_then(|extra| extra.get(key))
            }
        };
        block.filter(|value| !value.is_null())
    }

    /// Metapackages install nothing, so Composer records no install path.
    #[must_use]
    pub fn is_metapackage(&self) -> bool {
        self.package_type.as_deref() == Some(METAPACKAGE_TYPE)
    }

    /// Whether any rule block exists, in either channel, dev or not.
    #[must_use]
    pub fn declares_rules(&self) -> bool {
        RuleChannel::ALL.into_iter().any(|channel| {
            self.rule_block(channel, false).is_some() || self.rule_block(channel, true).is_some()
        })
    }

    /// Declared rules for a channel, with the development subset appended
    /// when `include_dev` is set.
    ///
    /// Each block is parsed on its own: a block with the wrong shape is
    /// reported in `malformed` and the other block is still used.
    #[must_use]
    pub fn declared_rules(&self, channel: RuleChannel, include_dev: bool) -> DeclaredRules {
        let blocks: &[bool] = if include_dev { &[false, true] } else { &[false] };
        let mut declared = DeclaredRules::default();

        for &dev in blocks {
            let Some(block) = self.rule_block(channel, dev) else {
                continue;
            };
            match RuleDeclaration::parse(block) {
                Ok(rules) => declared
                    .rules
                    .get_or_insert_with(RuleDeclaration::default)
                    .merge(rules),
                Err(err) => declared.malformed.push(err),
            }
        }

        declared.rules = declared.rules.filter(|rules| !rules.is_empty());
        declared
    }
}

/// Outcome of reading one channel of a package.
#[derive(Debug, Default)]
pub struct DeclaredRules {
    /// `None` when no valid, non-empty block was found.
    pub rules: Option<RuleDeclaration>,
    pub malformed: Vec<RuleShapeError>,
}
