use shunt_command::{Command, CommandContext, Result};

/// Print version information.
pub struct Version {
    help: Vec<String>,
}

impl Version {
    pub fn new() -> Self {
        Self {
            help: vec!["Print version information.".to_string()],
        }
    }
}

impl Command for Version {
    fn id(&self) -> &str {
        "version"
    }

    fn help(&self) -> &[String] {
        &self.help
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        println!("shunt {}", env!("CARGO_PKG_VERSION"));
        if ctx.is_verbose() {
            println!("shunt-command {}", shunt_command::VERSION);
        }
        Ok(())
    }
}
