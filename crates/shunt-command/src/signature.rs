//! Command signatures: ordered argument descriptors plus the token
//! classification both the verifier and positional binding rely on.

use serde::{Deserialize, Serialize};

use crate::arg::{ArgDef, ArgKind};
use crate::error::{Error, Result};

/// An ordered set of argument descriptors attached to a command.
///
/// Positional descriptors, in declaration order, define the expected
/// positional arity and binding order; options are unordered and addressed
/// by name. Uniqueness of names and of short flags is enforced at
/// construction so downstream scans never have to disambiguate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    args: Vec<ArgDef>,
}

impl Signature {
    /// The signature with no declared arguments.
    pub const fn empty() -> Self {
        Self { args: Vec::new() }
    }

    /// Build a signature, rejecting duplicate names, duplicate shorts, and
    /// default values on anything but a value option.
    pub fn new(args: Vec<ArgDef>) -> Result<Self> {
        for (i, def) in args.iter().enumerate() {
            if args[..i].iter().any(|prev| prev.name() == def.name()) {
                return Err(Error::DuplicateName {
                    name: def.name().to_string(),
                });
            }
            if let Some(short) = def.short_flag().filter(|_| def.is_option()) {
                if args[..i]
                    .iter()
                    .any(|prev| prev.is_option() && prev.short_flag() == Some(short))
                {
                    return Err(Error::DuplicateShort { short });
                }
            }
            if def.default().is_some() && def.kind() != ArgKind::Value {
                return Err(Error::DefaultOnNonValue {
                    name: def.name().to_string(),
                });
            }
        }
        Ok(Self { args })
    }

    pub fn args(&self) -> &[ArgDef] {
        &self.args
    }

    /// Positional descriptors in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &ArgDef> + '_ {
        self.args
            .iter()
            .filter(|def| def.kind() == ArgKind::Positional)
    }

    /// Option descriptors (flags and value options).
    pub fn options(&self) -> impl Iterator<Item = &ArgDef> + '_ {
        self.args.iter().filter(|def| def.is_option())
    }

    /// Look up an option descriptor by name.
    pub fn option(&self, name: &str) -> Option<&ArgDef> {
        self.options().find(|def| def.name() == name)
    }

    /// Index of a named positional value among the positional descriptors.
    pub fn value_index(&self, name: &str) -> Option<usize> {
        self.values().position(|def| def.name() == name)
    }

    /// Whether an option-shaped token is claimable by some declared option:
    /// exact long form, `--name=value` form, a declared short, or a cluster
    /// consisting entirely of declared flag shorts.
    pub fn matches_option_token(&self, token: &str) -> bool {
        if let Some(body) = token.strip_prefix("--") {
            let name = body.split_once('=').map_or(body, |(name, _)| name);
            return !name.is_empty() && self.option(name).is_some();
        }
        if let Some(body) = token.strip_prefix('-') {
            let mut chars = body.chars();
            let (Some(first), rest) = (chars.next(), chars.next()) else {
                return false;
            };
            if rest.is_none() {
                return self.options().any(|def| def.short_flag() == Some(first));
            }
            // Value options never combine, so a cluster is flags only.
            return body.chars().all(|c| {
                self.options()
                    .any(|def| def.kind() == ArgKind::Flag && def.short_flag() == Some(c))
            });
        }
        false
    }

    /// The declared value option a token selects in its standalone forms
    /// (`--name` or `-x`). The `--name=value` form carries its value inline
    /// and is deliberately not reported here.
    fn value_option_for_token(&self, token: &str) -> Option<&ArgDef> {
        self.options()
            .filter(|def| def.kind() == ArgKind::Value)
            .find(|def| {
                if let Some(body) = token.strip_prefix("--") {
                    return body == def.name();
                }
                if let Some(body) = token.strip_prefix('-') {
                    let mut chars = body.chars();
                    return match (chars.next(), chars.next()) {
                        (Some(c), None) => def.short_flag() == Some(c),
                        _ => false,
                    };
                }
                false
            })
    }

    /// The tokens that will bind to positional values, in order.
    ///
    /// Option-shaped tokens are skipped, and so is the single plain token
    /// following a declared value option, since that token belongs to the
    /// option even before the command parses it out.
    pub fn positional_tokens<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        let mut positionals = Vec::new();
        let mut expecting_value = false;

        for token in tokens {
            if expecting_value {
                expecting_value = false;
                if !token.starts_with('-') {
                    continue;
                }
            }
            if token.starts_with('-') {
                expecting_value = self.value_option_for_token(token).is_some();
                continue;
            }
            positionals.push(token.as_str());
        }

        positionals
    }
}
