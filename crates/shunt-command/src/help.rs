//! Plain-text help rendering for a resolved command.
//!
//! No color or terminal control; styling is the host's concern.

use crate::command::Command;

/// Render help for `command` as invoked via `executable` (the accumulated
/// invocation path).
pub fn render(command: &dyn Command, executable: &str) -> String {
    let signature = command.signature();
    let mut out = String::new();

    let mut usage = format!("Usage: {executable}");
    if !command.subcommands().is_empty() {
        usage.push_str(" <command>");
    }
    for value in signature.values() {
        usage.push_str(&format!(" <{}>", value.name()));
    }
    for option in signature.options() {
        match option.short_flag() {
            Some(short) => usage.push_str(&format!(" [--{},-{}]", option.name(), short)),
            None => usage.push_str(&format!(" [--{}]", option.name())),
        }
    }
    out.push_str(&usage);
    out.push('\n');

    if !command.help().is_empty() {
        out.push('\n');
        for line in command.help() {
            out.push_str(line);
            out.push('\n');
        }
    }

    let width = signature
        .args()
        .iter()
        .map(|def| def.name().len())
        .max()
        .unwrap_or(0)
        + 2;

    if signature.values().next().is_some() {
        out.push_str("\nArguments:\n");
        for def in signature.values() {
            render_entry(&mut out, def.name(), def.help_lines(), width);
        }
    }

    if signature.options().next().is_some() {
        out.push_str("\nOptions:\n");
        for def in signature.options() {
            render_entry(&mut out, def.name(), def.help_lines(), width);
        }
    }

    if !command.subcommands().is_empty() {
        out.push_str("\nCommands:\n");
        let width = command
            .subcommands()
            .iter()
            .map(|child| child.id().len())
            .max()
            .unwrap_or(0)
            + 2;
        for child in command.subcommands() {
            render_entry(&mut out, child.id(), child.help(), width);
        }
        out.push('\n');
        out.push_str(&format!(
            "Use '{executable} <command> --help' for more information on a command.\n"
        ));
    }

    out
}

/// One columnar row: the name right-aligned into `width`, first help line
/// beside it, further lines hanging at the same indent.
fn render_entry(out: &mut String, name: &str, help: &[String], width: usize) {
    out.push_str(&format!("{name:>width$}"));
    if help.is_empty() {
        out.push_str(" No description\n");
        return;
    }
    for (i, line) in help.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!(" {line}\n"));
        } else {
            out.push_str(&format!("{:>width$} {line}\n", ""));
        }
    }
}
