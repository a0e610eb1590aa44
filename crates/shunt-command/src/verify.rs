//! Fail-fast signature verification, run once between routing and
//! execution.

use crate::command::Command;
use crate::error::{Error, Result};
use crate::input::CommandInput;

/// Check the resolved command's signature against the post-routing store.
///
/// Positional arity must match exactly — not "at least" — counting only
/// tokens that would bind to positional values (the pending value of a
/// declared value option belongs to that option, not to a positional).
/// After that, every surviving option-shaped token must be claimable by
/// some declared option, or the whole invocation is rejected before the
/// command reads anything.
pub fn verify(command: &dyn Command, input: &CommandInput) -> Result<()> {
    let signature = command.signature();

    let expected = signature.values().count();
    let actual = signature.positional_tokens(input.remaining()).len();
    if actual != expected {
        return Err(Error::InvalidArgumentCount { expected, actual });
    }

    for token in input.remaining() {
        if token.starts_with('-') && !signature.matches_option_token(token) {
            return Err(Error::UnknownOption {
                token: token.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::ArgDef;
    use crate::context::CommandContext;
    use crate::signature::Signature;

    struct Fixture {
        signature: Signature,
    }

    impl Command for Fixture {
        fn id(&self) -> &str {
            "fixture"
        }

        fn signature(&self) -> &Signature {
            &self.signature
        }

        fn run(&self, _ctx: &mut CommandContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    fn fixture(args: Vec<ArgDef>) -> Fixture {
        Fixture {
            signature: Signature::new(args).unwrap(),
        }
    }

    fn input(tokens: &[&str]) -> CommandInput {
        let mut raw = vec!["prog".to_string()];
        raw.extend(tokens.iter().map(|s| s.to_string()));
        CommandInput::new(raw)
    }

    #[test]
    fn exact_arity_passes() {
        let command = fixture(vec![ArgDef::positional("src"), ArgDef::positional("dst")]);
        verify(&command, &input(&["a", "b"])).unwrap();
    }

    #[test]
    fn surplus_positionals_are_rejected() {
        let command = fixture(vec![ArgDef::positional("src"), ArgDef::positional("dst")]);
        let err = verify(&command, &input(&["a", "b", "c"])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgumentCount {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn missing_positionals_are_rejected() {
        let command = fixture(vec![ArgDef::positional("src"), ArgDef::positional("dst")]);
        let err = verify(&command, &input(&["a"])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgumentCount {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn pending_value_of_declared_option_is_not_a_positional() {
        let command = fixture(vec![
            ArgDef::positional("path"),
            ArgDef::option("output").short('o'),
        ]);
        verify(&command, &input(&["--output", "out.txt", "in.txt"])).unwrap();
        verify(&command, &input(&["-o", "out.txt", "in.txt"])).unwrap();
        verify(&command, &input(&["--output=out.txt", "in.txt"])).unwrap();
    }

    #[test]
    fn undeclared_option_is_rejected() {
        let command = fixture(vec![ArgDef::flag("force")]);
        let err = verify(&command, &input(&["--frob"])).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOption {
                token: "--frob".to_string()
            }
        );
    }

    #[test]
    fn cluster_with_undeclared_short_is_rejected() {
        let command = fixture(vec![
            ArgDef::flag("all").short('a'),
            ArgDef::flag("brief").short('b'),
        ]);
        verify(&command, &input(&["-ab"])).unwrap();
        let err = verify(&command, &input(&["-abz"])).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOption {
                token: "-abz".to_string()
            }
        );
    }

    #[test]
    fn declared_options_in_any_form_pass() {
        let command = fixture(vec![
            ArgDef::flag("force").short('f'),
            ArgDef::option("count").short('c'),
        ]);
        verify(&command, &input(&["--force"])).unwrap();
        verify(&command, &input(&["-f", "--count", "3"])).unwrap();
        verify(&command, &input(&["--count=3"])).unwrap();
    }
}
