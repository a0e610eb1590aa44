use shunt_command::{ArgDef, Command, CommandContext, Group, Result, Signature};

pub fn group() -> Result<Group> {
    Ok(Group::new("text")
        .help_line("Transform words.")
        .subcommand(Upper::new()?)
        .subcommand(Lower::new()?))
}

/// Print a word in upper case.
pub struct Upper {
    signature: Signature,
    help: Vec<String>,
}

impl Upper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            signature: Signature::new(vec![
                ArgDef::positional("word").help("Word to transform"),
                ArgDef::flag("twice")
                    .short('t')
                    .help("Print the result twice"),
                ArgDef::flag("bang")
                    .short('b')
                    .help("Append an exclamation mark"),
            ])?,
            help: vec!["Print a word in upper case.".to_string()],
        })
    }
}

impl Command for Upper {
    fn id(&self) -> &str {
        "upper"
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn help(&self) -> &[String] {
        &self.help
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let word = ctx.argument("word")?;
        let twice = ctx.flag("twice")?;
        let bang = ctx.flag("bang")?;

        let mut out = word.to_uppercase();
        if bang {
            out.push('!');
        }
        println!("{out}");
        if twice {
            println!("{out}");
        }
        Ok(())
    }
}

/// Print a word in lower case.
pub struct Lower {
    signature: Signature,
    help: Vec<String>,
}

impl Lower {
    pub fn new() -> Result<Self> {
        Ok(Self {
            signature: Signature::new(vec![
                ArgDef::positional("word").help("Word to transform"),
            ])?,
            help: vec!["Print a word in lower case.".to_string()],
        })
    }
}

impl Command for Lower {
    fn id(&self) -> &str {
        "lower"
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn help(&self) -> &[String] {
        &self.help
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let word = ctx.argument("word")?;
        println!("{}", word.to_lowercase());
        Ok(())
    }
}
