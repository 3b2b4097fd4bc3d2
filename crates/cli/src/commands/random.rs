use clap::Subcommand;
use std::io::Write;
use utilkit_core::Result;
use utilkit_utils::random::{
    generate_random_number, generate_random_number_between, generate_random_string,
    RandomNumberOptions,
};

#[derive(Subcommand)]
pub enum RandomCommands {
    /// A number with exactly LENGTH digits
    Number { length: u32 },
    /// A number between MIN and MAX inclusive
    Between {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
        /// Only whole numbers
        #[arg(long)]
        integer: bool,
        /// Round to this many decimals
        #[arg(long)]
        decimal_places: Option<usize>,
    },
    /// An alphanumeric string of LENGTH characters
    String { length: usize },
}

impl RandomCommands {
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        match self {
            RandomCommands::Number { length } => {
                writeln!(out, "{}", generate_random_number(length)?)?;
            }
            RandomCommands::Between {
                min,
                max,
                integer,
                decimal_places,
            } => {
                let options = RandomNumberOptions {
                    integer,
                    decimal_places,
                };
                writeln!(
                    out,
                    "{}",
                    generate_random_number_between(min, max, &options)?
                )?;
            }
            RandomCommands::String { length } => {
                writeln!(out, "{}", generate_random_string(length)?)?;
            }
        }
        Ok(())
    }
}
