use clap::Subcommand;
use std::io::Write;
use utilkit_config::Config;
use utilkit_core::Result;
use utilkit_utils::numeric::bytes::{convert_with_base, format_bytes_with};
use utilkit_utils::ByteUnit;

#[derive(Subcommand)]
pub enum BytesCommands {
    /// Convert a value from one unit to another
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit (bit, B, KB, MB, GB, TB, PB, EB, ZB, YB)
        from: ByteUnit,
        /// Target unit
        to: ByteUnit,
        /// Conversion base, 1024 or 1000 (default from config)
        #[arg(long)]
        base: Option<f64>,
    },
    /// Render a byte count with the most fitting unit
    Format {
        #[arg(allow_negative_numbers = true)]
        bytes: f64,
        /// Fractional digits (default from config)
        #[arg(short, long)]
        decimals: Option<i32>,
        /// Conversion base, 1024 or 1000 (default from config)
        #[arg(long)]
        base: Option<f64>,
    },
}

impl BytesCommands {
    pub fn execute(self, config: &Config, out: &mut dyn Write) -> Result<()> {
        match self {
            BytesCommands::Convert {
                value,
                from,
                to,
                base,
            } => {
                let base = base.unwrap_or(config.bytes.base);
                writeln!(out, "{}", convert_with_base(value, from, to, base))?;
            }
            BytesCommands::Format {
                bytes,
                decimals,
                base,
            } => {
                let decimals = decimals.unwrap_or(config.bytes.decimals);
                let base = base.unwrap_or(config.bytes.base);
                writeln!(out, "{}", format_bytes_with(bytes, decimals, base))?;
            }
        }
        Ok(())
    }
}
