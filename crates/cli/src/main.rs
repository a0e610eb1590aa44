mod head;
mod text;
mod version;

use anyhow::Result;
use shunt_command::Group;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();

    let root = Group::new("shunt")
        .help_line("Inspect and transform small pieces of text.")
        .subcommand(head::Head::new()?)
        .subcommand(text::group()?)
        .subcommand(version::Version::new());

    shunt_command::run(&root, std::env::args().collect())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
