use crate::commands::Commands;
use std::io::Write;
use utilkit_config::Config;
use utilkit_core::Result;

impl Commands {
    pub fn execute(self, config: &Config, out: &mut dyn Write) -> Result<()> {
        match self {
            Commands::Bytes { command } => command.execute(config, out),
            Commands::Currency(args) => args.execute(config, out),
            Commands::Base64 { command } => command.execute(out),
            Commands::Uuid(args) => args.execute(out),
            Commands::Random { command } => command.execute(out),
            Commands::Url { command } => command.execute(out),
            Commands::Date { command } => command.execute(out),
        }
    }
}
