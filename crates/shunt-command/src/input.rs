//! Raw token store for one invocation.
//!
//! All consumption is destructive: a token claimed by an option or value
//! parse is gone from every later scan. Within a single parse call the
//! token is only tombstoned (its slot set to `None`), never index-shifted,
//! so positions stay stable for the rest of that scan; the buffer is
//! compacted exactly once when the call returns, on every exit path
//! including the error path.

use crate::arg::{ArgDef, ArgKind};
use crate::error::{Error, Result};

/// Marker returned when a flag option is matched.
pub const PRESENT: &str = "true";

/// Mutable view over the raw argument list for one invocation.
///
/// The first raw argument is split off as the executable path; the resolver
/// grows that path with each subcommand it descends into. One invocation
/// owns one `CommandInput` for its entire lifetime; it is not designed for
/// concurrent access.
#[derive(Debug, Clone)]
pub struct CommandInput {
    executable_path: Vec<String>,
    remaining: Vec<String>,
}

impl CommandInput {
    /// Build the store from the full raw argument list.
    ///
    /// # Panics
    ///
    /// Panics if `arguments` is empty; at least the executable path is
    /// required.
    pub fn new(mut arguments: Vec<String>) -> Self {
        assert!(
            !arguments.is_empty(),
            "at least one argument (the executable path) is required"
        );
        let executable = arguments.remove(0);
        Self {
            executable_path: vec![executable],
            remaining: arguments,
        }
    }

    /// Build the store from the current process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }

    /// The invocation path joined with spaces, e.g. `prog build release`.
    pub fn executable(&self) -> String {
        self.executable_path.join(" ")
    }

    pub fn executable_path(&self) -> &[String] {
        &self.executable_path
    }

    /// Record a consumed subcommand id on the invocation path.
    pub fn push_executable(&mut self, id: &str) {
        self.executable_path.push(id.to_string());
    }

    /// Tokens not yet claimed by any parse, in original relative order.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Restore a token to the front of the buffer. Used by the resolver to
    /// hand back a routing token no child matched.
    pub fn push_front(&mut self, token: String) {
        self.remaining.insert(0, token);
    }

    /// Remove the first exact occurrence of `token`. Used for the reserved
    /// global tokens stripped before routing.
    pub(crate) fn remove_token(&mut self, token: &str) -> bool {
        match self.remaining.iter().position(|arg| arg == token) {
            Some(index) => {
                self.remaining.remove(index);
                true
            }
            None => false,
        }
    }

    /// Scan for the first token matching `def` and consume it.
    ///
    /// Matching tries, in order: the deprecated `--name=value` form (emits
    /// a deprecation notice on the diagnostics sink but binds like the
    /// modern form), the exact long form `--name`, then the short form. A
    /// value option's short must stand alone (`-c`); a flag's short may
    /// ride anywhere in a cluster (`-abc`), in which case only that
    /// character is stripped and the rest of the cluster survives for
    /// later scans.
    ///
    /// A matched flag yields [`PRESENT`]. A matched value option yields the
    /// inline value, else the immediately following token when it exists
    /// and is not option-shaped (consuming it too), else the declared
    /// default; with none of the three the scan fails with
    /// [`Error::OptionValueRequired`]. No match at all is `Ok(None)` — the
    /// token may belong to a different descriptor.
    pub fn parse_option(&mut self, def: &ArgDef) -> Result<Option<String>> {
        let mut slots: Vec<Option<String>> = self.remaining.drain(..).map(Some).collect();
        let parsed = scan_option(&mut slots, def);
        self.remaining = slots.into_iter().flatten().collect();
        parsed
    }

    /// Consume and return the next plain token.
    ///
    /// An option-shaped token at the front means "no more positional values
    /// here" and stops the scan immediately; that is not an error at this
    /// layer, since options are expected to have been parsed out already.
    pub fn parse_argument(&mut self) -> Option<String> {
        match self.remaining.first() {
            Some(token) if !token.starts_with('-') => Some(self.remaining.remove(0)),
            _ => None,
        }
    }
}

fn scan_option(slots: &mut [Option<String>], def: &ArgDef) -> Result<Option<String>> {
    if def.kind() == ArgKind::Positional {
        return Ok(None);
    }
    let long = format!("--{}", def.name());
    let deprecated = format!("--{}=", def.name());

    for i in 0..slots.len() {
        let Some(token) = slots[i].clone() else {
            continue;
        };

        let mut inline_value = None;
        if let Some(value) = token.strip_prefix(deprecated.as_str()) {
            tracing::warn!(
                option = def.name(),
                "--option=value syntax is deprecated, use --option value instead"
            );
            inline_value = Some(value.to_string());
            slots[i] = None;
        } else if token.starts_with("--") {
            if token != long {
                continue;
            }
            slots[i] = None;
        } else if let Some(short) = def.short_flag().filter(|_| token.starts_with('-')) {
            match def.kind() {
                ArgKind::Value => {
                    // A value option's short must match the whole token.
                    if token != format!("-{short}") {
                        continue;
                    }
                    slots[i] = None;
                }
                ArgKind::Flag => {
                    let Some((at, _)) = token.char_indices().skip(1).find(|&(_, c)| c == short)
                    else {
                        continue;
                    };
                    let mut rest = token.clone();
                    rest.remove(at);
                    // A cluster reduced to a bare `-` is spent.
                    slots[i] = if rest == "-" { None } else { Some(rest) };
                }
                ArgKind::Positional => unreachable!("positionals never match as options"),
            }
        } else {
            continue;
        }

        // The token matched `def`.
        return match def.kind() {
            ArgKind::Flag => Ok(Some(PRESENT.to_string())),
            ArgKind::Value => {
                let supplied = inline_value.or_else(|| take_following_value(slots, i));
                match supplied.or_else(|| def.default().map(str::to_string)) {
                    Some(value) => Ok(Some(value)),
                    None => Err(Error::OptionValueRequired {
                        option: def.name().to_string(),
                    }),
                }
            }
            ArgKind::Positional => unreachable!("positionals never match as options"),
        };
    }

    Ok(None)
}

fn take_following_value(slots: &mut [Option<String>], i: usize) -> Option<String> {
    let next = slots.get_mut(i + 1)?;
    match next {
        Some(value) if !value.starts_with('-') => next.take(),
        _ => None,
    }
}
