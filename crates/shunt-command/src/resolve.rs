//! Subcommand routing and the full invocation pipeline.

use crate::command::Command;
use crate::context::{CommandContext, GlobalArgs};
use crate::error::Result;
use crate::help;
use crate::input::CommandInput;
use crate::verify::verify;

/// Walk the command tree to the node this invocation targets.
///
/// While the current node has children, the next plain token is consumed
/// unconditionally and interpreted as a routing token. An exact child-id
/// match descends and extends the executable path; a mismatch pushes the
/// token back onto the front of the buffer (it will be reinterpreted as a
/// positional value) and stops. Running out of tokens while children
/// remain stops at the current node — a parent can act as its own target.
///
/// Ids are compared by exact equality only; the first match wins.
pub fn resolve<'a>(root: &'a dyn Command, input: &mut CommandInput) -> &'a dyn Command {
    let mut current = root;
    while !current.subcommands().is_empty() {
        let Some(name) = input.parse_argument() else {
            break;
        };
        match current
            .subcommands()
            .iter()
            .find(|child| child.id() == name)
        {
            Some(child) => {
                input.push_executable(child.id());
                tracing::debug!(subcommand = child.id(), "descending");
                current = child.as_ref();
            }
            None => {
                input.push_front(name);
                break;
            }
        }
    }
    current
}

/// Execute one full invocation against a command tree.
///
/// The raw argument list is split into executable path and working buffer,
/// reserved global tokens are stripped, the tree is walked, and then either
/// help for the resolved node is printed (when `--help` was given) or the
/// node's signature is verified and its run behavior invoked with a
/// [`CommandContext`].
///
/// Synchronous and single-threaded; every failure is surfaced to the caller
/// immediately, with no rollback of the store's consumption up to that
/// point.
pub fn run(root: &dyn Command, arguments: Vec<String>) -> Result<()> {
    let mut input = CommandInput::new(arguments);
    let globals = GlobalArgs::extract(&mut input);
    let command = resolve(root, &mut input);
    tracing::debug!(executable = %input.executable(), "resolved command");

    if globals.help {
        print!("{}", help::render(command, &input.executable()));
        return Ok(());
    }

    verify(command, &input)?;
    let mut ctx = CommandContext::new(input, command.signature(), globals);
    command.run(&mut ctx)
}
