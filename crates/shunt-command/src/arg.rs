//! Argument descriptor model.

use serde::{Deserialize, Serialize};

/// How a declared argument binds to raw tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    /// Bound by position among the plain tokens, in declaration order.
    Positional,
    /// Named option carrying no value; resolves to a presence marker.
    Flag,
    /// Named option requiring an accompanying string.
    Value,
}

/// Immutable description of one expected value or option.
///
/// The name doubles as the long-flag spelling (`--name`) and the lookup key
/// a command uses to read the bound value. The model is plain data so hosts
/// and tooling can emit or load signatures as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArgDef {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    short: Option<char>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    help: Vec<String>,
    kind: ArgKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

impl ArgDef {
    fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: Vec::new(),
            kind,
            default_value: None,
        }
    }

    /// Declare a positional value bound by declaration order.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Positional)
    }

    /// Declare a presence-only option (`--name`, `-x`, combinable `-xyz`).
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Flag)
    }

    /// Declare a value-taking option (`--name value`).
    pub fn option(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Value)
    }

    /// Set the single-character short spelling (`-x`). Only meaningful for
    /// options.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Append one help line. May be chained for multi-line help.
    pub fn help(mut self, line: impl Into<String>) -> Self {
        self.help.push(line.into());
        self
    }

    /// Set the value used when the option is named without a value token.
    /// Only meaningful for value options; `Signature::new` rejects it on
    /// other kinds.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_flag(&self) -> Option<char> {
        self.short
    }

    pub fn help_lines(&self) -> &[String] {
        &self.help
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn default(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether this descriptor is an option (flag or value) rather than a
    /// positional value.
    pub fn is_option(&self) -> bool {
        matches!(self.kind, ArgKind::Flag | ArgKind::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_kind_and_fields() {
        let def = ArgDef::option("output")
            .short('o')
            .help("Where to write")
            .help("Defaults to stdout")
            .default_value("-");

        assert_eq!(def.name(), "output");
        assert_eq!(def.short_flag(), Some('o'));
        assert_eq!(def.kind(), ArgKind::Value);
        assert_eq!(def.default(), Some("-"));
        assert_eq!(def.help_lines().len(), 2);
        assert!(def.is_option());
        assert!(!ArgDef::positional("path").is_option());
    }

    #[test]
    fn serde_model_uses_kebab_case_and_skips_empty_fields() {
        let def = ArgDef::flag("verbose").short('v');
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["kind"], "flag");
        assert_eq!(json["short"], "v");
        assert!(json.get("default-value").is_none());
        assert!(json.get("help").is_none());

        let parsed: ArgDef = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, def);
    }
}
