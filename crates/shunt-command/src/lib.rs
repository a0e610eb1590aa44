//! Signature-driven argument parsing and subcommand routing for building
//! multi-level command-line tools.
//!
//! A host declares a tree of [`Command`] nodes, each with a [`Signature`]
//! of positional values and named options. [`run`] maps the raw process
//! arguments onto that tree: reserved global tokens are stripped, leading
//! plain tokens route through the tree, the resolved node's signature is
//! verified against whatever is left, and the node's run behavior reads
//! its values and options through a [`CommandContext`].
//!
//! Token consumption is strictly left-to-right and destructive: once an
//! option or value claims a token, later scans never see it again.
//!
//! ```
//! use shunt_command::{ArgDef, CommandInput};
//!
//! let mut input = CommandInput::new(vec![
//!     "demo".to_string(),
//!     "--output".to_string(),
//!     "out.txt".to_string(),
//!     "in.txt".to_string(),
//! ]);
//! let output = ArgDef::option("output").short('o');
//! assert_eq!(input.parse_option(&output).unwrap(), Some("out.txt".to_string()));
//! assert_eq!(input.parse_argument(), Some("in.txt".to_string()));
//! ```

mod arg;
mod command;
mod context;
mod error;
pub mod help;
mod input;
mod resolve;
mod signature;
mod verify;

// Re-export core types
pub use arg::{ArgDef, ArgKind};
pub use command::{Command, Group};
pub use context::{CommandContext, GlobalArgs};
pub use error::{Error, Result};
pub use input::{CommandInput, PRESENT};
pub use resolve::{resolve, run};
pub use signature::Signature;
pub use verify::verify;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
