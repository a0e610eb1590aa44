//! Invocation-scoped state handed to the resolved command.

use crate::error::{Error, Result};
use crate::input::CommandInput;
use crate::signature::Signature;

/// Reserved global tokens, stripped from the store before routing and
/// never visible to any command's own signature.
///
/// The state is an explicit value threaded down into command execution
/// rather than process-global storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// `-y` forces confirmations to yes, `-n` to no; `-n` wins when both
    /// appear in one invocation.
    pub confirm_override: Option<bool>,
    /// `--verbose` or `-vv`.
    pub verbose: bool,
    /// `--help`: suppresses normal execution in favor of help rendering.
    pub help: bool,
}

impl GlobalArgs {
    /// Strip the reserved tokens out of `input`. Each removes the first
    /// exact occurrence of its token.
    pub fn extract(input: &mut CommandInput) -> Self {
        let mut globals = Self::default();
        if input.remove_token("-y") {
            globals.confirm_override = Some(true);
        }
        if input.remove_token("-n") {
            globals.confirm_override = Some(false);
        }
        if input.remove_token("--verbose") {
            globals.verbose = true;
        }
        if input.remove_token("-vv") {
            globals.verbose = true;
        }
        globals.help = input.remove_token("--help");
        globals
    }
}

/// What a resolved command runs against: the routed, verified token store,
/// its own signature, and the extracted global state.
pub struct CommandContext<'a> {
    input: CommandInput,
    signature: &'a Signature,
    globals: GlobalArgs,
}

impl<'a> CommandContext<'a> {
    pub fn new(input: CommandInput, signature: &'a Signature, globals: GlobalArgs) -> Self {
        Self {
            input,
            signature,
            globals,
        }
    }

    /// Read the positional value declared as `name`.
    ///
    /// Binding is by index among the positional descriptors, so commands
    /// may read their values in any order; nothing is consumed. Requesting
    /// an undeclared name is a programmer error
    /// ([`Error::ArgumentNotFound`]), not a user error.
    pub fn argument(&self, name: &str) -> Result<String> {
        let signature = self.signature;
        let Some(index) = signature.value_index(name) else {
            return Err(Error::ArgumentNotFound {
                name: name.to_string(),
            });
        };
        let bound = signature.positional_tokens(self.input.remaining());
        match bound.get(index) {
            Some(token) => Ok((*token).to_string()),
            None => Err(Error::InvalidArgumentCount {
                expected: signature.values().count(),
                actual: bound.len(),
            }),
        }
    }

    /// Parse the declared option `name` out of the store.
    ///
    /// `Ok(None)` means the invocation simply did not name it. Requesting
    /// an option absent from the signature fails with
    /// [`Error::OptionNotFound`].
    pub fn option(&mut self, name: &str) -> Result<Option<String>> {
        let signature = self.signature;
        let Some(def) = signature.option(name) else {
            return Err(Error::OptionNotFound {
                name: name.to_string(),
            });
        };
        self.input.parse_option(def)
    }

    /// Presence of the declared option `name`.
    pub fn flag(&mut self, name: &str) -> Result<bool> {
        Ok(self.option(name)?.is_some())
    }

    /// `-y`/`-n` override for interactive confirmations, if either was
    /// given.
    pub fn confirm_override(&self) -> Option<bool> {
        self.globals.confirm_override
    }

    pub fn is_verbose(&self) -> bool {
        self.globals.verbose
    }

    /// The accumulated invocation path, e.g. `prog build release`.
    pub fn executable(&self) -> String {
        self.input.executable()
    }

    /// Tokens not yet claimed by any parse.
    pub fn remaining(&self) -> &[String] {
        self.input.remaining()
    }

    pub fn input(&self) -> &CommandInput {
        &self.input
    }

    /// Direct access to the store for per-descriptor parsing beyond the
    /// named helpers.
    pub fn input_mut(&mut self) -> &mut CommandInput {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::ArgDef;

    fn context(tokens: &[&str], signature: &'static Signature) -> CommandContext<'static> {
        let mut raw = vec!["prog".to_string()];
        raw.extend(tokens.iter().map(|s| s.to_string()));
        CommandContext::new(CommandInput::new(raw), signature, GlobalArgs::default())
    }

    fn leak(signature: Signature) -> &'static Signature {
        Box::leak(Box::new(signature))
    }

    #[test]
    fn extract_strips_reserved_tokens() {
        let mut input = CommandInput::new(
            ["prog", "-y", "build", "--verbose", "--help"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        let globals = GlobalArgs::extract(&mut input);

        assert_eq!(globals.confirm_override, Some(true));
        assert!(globals.verbose);
        assert!(globals.help);
        assert_eq!(input.remaining(), ["build"]);
    }

    #[test]
    fn confirm_no_wins_over_yes() {
        let mut input = CommandInput::new(
            ["prog", "-y", "-n"].iter().map(|s| s.to_string()).collect(),
        );
        let globals = GlobalArgs::extract(&mut input);
        assert_eq!(globals.confirm_override, Some(false));
        assert!(input.remaining().is_empty());
    }

    #[test]
    fn short_verbose_spelling_counts() {
        let mut input =
            CommandInput::new(["prog", "-vv"].iter().map(|s| s.to_string()).collect());
        assert!(GlobalArgs::extract(&mut input).verbose);
    }

    #[test]
    fn arguments_bind_by_name_in_any_read_order() {
        let signature = leak(
            Signature::new(vec![ArgDef::positional("src"), ArgDef::positional("dst")]).unwrap(),
        );
        let ctx = context(&["a.txt", "b.txt"], signature);

        assert_eq!(ctx.argument("dst").unwrap(), "b.txt");
        assert_eq!(ctx.argument("src").unwrap(), "a.txt");
        // Reads do not consume.
        assert_eq!(ctx.argument("dst").unwrap(), "b.txt");
    }

    #[test]
    fn undeclared_argument_is_a_programmer_error() {
        let signature = leak(Signature::new(vec![ArgDef::positional("src")]).unwrap());
        let ctx = context(&["a.txt"], signature);
        assert_eq!(
            ctx.argument("dest").unwrap_err(),
            Error::ArgumentNotFound {
                name: "dest".to_string()
            }
        );
    }

    #[test]
    fn options_and_flags_parse_against_the_store() {
        let signature = leak(
            Signature::new(vec![
                ArgDef::option("count").short('c').default_value("10"),
                ArgDef::flag("force").short('f'),
            ])
            .unwrap(),
        );
        let mut ctx = context(&["--count", "3", "-f"], signature);

        assert_eq!(ctx.option("count").unwrap(), Some("3".to_string()));
        assert!(ctx.flag("force").unwrap());
        // Both were consumed from the shared store.
        assert!(ctx.input().remaining().is_empty());
        assert!(!ctx.flag("force").unwrap());
    }

    #[test]
    fn raw_store_access_shares_consumption_with_the_helpers() {
        let signature = leak(Signature::new(vec![ArgDef::flag("force").short('f')]).unwrap());
        let mut ctx = context(&["-f", "--tag", "v1"], signature);

        // An undeclared descriptor can still be parsed straight off the
        // store by hosts that know what they are doing.
        let tag = ArgDef::option("tag");
        assert_eq!(
            ctx.input_mut().parse_option(&tag).unwrap(),
            Some("v1".to_string())
        );
        assert!(ctx.flag("force").unwrap());
        assert!(ctx.remaining().is_empty());
    }

    #[test]
    fn undeclared_option_is_a_programmer_error() {
        let signature = leak(Signature::empty());
        let mut ctx = context(&[], signature);
        assert_eq!(
            ctx.option("count").unwrap_err(),
            Error::OptionNotFound {
                name: "count".to_string()
            }
        );
        assert_eq!(
            ctx.flag("force").unwrap_err(),
            Error::OptionNotFound {
                name: "force".to_string()
            }
        );
    }
}
