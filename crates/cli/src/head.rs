use std::fs;

use shunt_command::{ArgDef, Command, CommandContext, Error, Result, Signature};

/// Print the first lines of a file.
pub struct Head {
    signature: Signature,
    help: Vec<String>,
}

impl Head {
    pub fn new() -> Result<Self> {
        Ok(Self {
            signature: Signature::new(vec![
                ArgDef::positional("path").help("File to read"),
                ArgDef::option("count")
                    .short('c')
                    .default_value("10")
                    .help("Number of lines to print"),
                ArgDef::flag("number").help("Prefix each line with its line number"),
            ])?,
            help: vec!["Print the first lines of a file.".to_string()],
        })
    }
}

impl Command for Head {
    fn id(&self) -> &str {
        "head"
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn help(&self) -> &[String] {
        &self.help
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let path = ctx.argument("path")?;
        let raw_count = ctx.option("count")?.unwrap_or_else(|| "10".to_string());
        let count: usize = raw_count
            .parse()
            .map_err(|_| Error::execution(format!("invalid line count `{raw_count}`")))?;
        let number = ctx.flag("number")?;

        tracing::debug!(path = %path, count, "reading file head");
        let contents = fs::read_to_string(&path)
            .map_err(|err| Error::execution(format!("cannot read {path}: {err}")))?;

        for (i, line) in contents.lines().take(count).enumerate() {
            if number {
                println!("{:>6}  {line}", i + 1);
            } else {
                println!("{line}");
            }
        }
        Ok(())
    }
}
