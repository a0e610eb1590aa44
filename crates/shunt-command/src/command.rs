//! The command tree: a trait for runnable nodes and a children-only group.

use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::signature::Signature;

static EMPTY_SIGNATURE: Signature = Signature::empty();

/// A named unit in the command tree.
///
/// A node with no subcommands is a leaf — the final routing target. Nodes
/// are constructed once at startup by the host application and are never
/// mutated by the routing or verification machinery.
pub trait Command {
    /// Leaf identity / subcommand name.
    fn id(&self) -> &str;

    /// Declared positional values and options.
    fn signature(&self) -> &Signature {
        &EMPTY_SIGNATURE
    }

    /// Help lines shown by the help renderer.
    fn help(&self) -> &[String] {
        &[]
    }

    /// Child nodes; empty means leaf.
    fn subcommands(&self) -> &[Box<dyn Command>] {
        &[]
    }

    /// Execute against a routed, verified context.
    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<()>;
}

/// A node that only routes: it carries children, help, and no behavior.
///
/// Resolving to a bare group (no further routing token) fails with
/// [`Error::CommandNotFound`]; a parent that should act as its own default
/// target implements [`Command`] directly instead.
pub struct Group {
    id: String,
    help: Vec<String>,
    subcommands: Vec<Box<dyn Command>>,
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            help: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Append one help line.
    pub fn help_line(mut self, line: impl Into<String>) -> Self {
        self.help.push(line.into());
        self
    }

    /// Append a child command.
    pub fn subcommand(mut self, command: impl Command + 'static) -> Self {
        self.subcommands.push(Box::new(command));
        self
    }
}

impl Command for Group {
    fn id(&self) -> &str {
        &self.id
    }

    fn help(&self) -> &[String] {
        &self.help
    }

    fn subcommands(&self) -> &[Box<dyn Command>] {
        &self.subcommands
    }

    fn run(&self, _ctx: &mut CommandContext<'_>) -> Result<()> {
        Err(Error::CommandNotFound)
    }
}
