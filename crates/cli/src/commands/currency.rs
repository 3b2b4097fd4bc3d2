use clap::Args;
use std::io::Write;
use utilkit_config::Config;
use utilkit_core::Result;
use utilkit_utils::numeric::currency;
use utilkit_utils::CurrencyOptions;

#[derive(Args)]
pub struct CurrencyArgs {
    /// Amount to format
    #[arg(allow_negative_numbers = true)]
    amount: f64,

    /// BCP 47 locale such as en-US or de-DE
    #[arg(short, long)]
    locale: Option<String>,

    /// ISO 4217 currency code such as USD or EUR
    #[arg(short, long)]
    currency: Option<String>,

    /// Minimum number of fractional digits
    #[arg(long)]
    min_fraction_digits: Option<u8>,

    /// Maximum number of fractional digits
    #[arg(long)]
    max_fraction_digits: Option<u8>,
}

impl CurrencyArgs {
    pub fn execute(self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let options = CurrencyOptions {
            locale: self.locale,
            currency: self.currency,
            minimum_fraction_digits: self.min_fraction_digits,
            maximum_fraction_digits: self.max_fraction_digits,
        }
        .or(&config.currency_options());
        writeln!(out, "{}", currency::format(self.amount, &options)?)?;
        Ok(())
    }
}
