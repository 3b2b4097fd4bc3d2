use clap::Subcommand;
use std::io::Write;
use utilkit_core::Result;
use utilkit_utils::text::base64;
use utilkit_utils::IsBase64Options;

#[derive(Subcommand)]
pub enum Base64Commands {
    /// Encode UTF-8 text
    Encode { text: String },
    /// Decode to UTF-8 text
    Decode { data: String },
    /// Print whether the input is base64
    Check {
        data: String,
        /// Accept a data:<mime>;base64, prefix
        #[arg(long)]
        allow_mime: bool,
        /// Demand a data:<mime>;base64, prefix
        #[arg(long)]
        mime_required: bool,
        /// Accept input without = padding
        #[arg(long)]
        no_padding: bool,
        /// Reject the empty string
        #[arg(long)]
        disallow_empty: bool,
    },
    /// Convert standard base64 to the URL-safe alphabet
    ToUrlSafe { data: String },
    /// Convert URL-safe base64 to the standard alphabet
    FromUrlSafe { data: String },
}

impl Base64Commands {
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        match self {
            Base64Commands::Encode { text } => writeln!(out, "{}", base64::encode(&text))?,
            Base64Commands::Decode { data } => writeln!(out, "{}", base64::decode(&data)?)?,
            Base64Commands::Check {
                data,
                allow_mime,
                mime_required,
                no_padding,
                disallow_empty,
            } => {
                let options = IsBase64Options {
                    allow_empty: !disallow_empty,
                    mime_required,
                    allow_mime,
                    padding_required: !no_padding,
                };
                writeln!(out, "{}", base64::is_base64(&data, &options))?;
            }
            Base64Commands::ToUrlSafe { data } => {
                writeln!(out, "{}", base64::base64_to_url_safe(&data))?;
            }
            Base64Commands::FromUrlSafe { data } => {
                writeln!(out, "{}", base64::url_safe_to_base64(&data))?;
            }
        }
        Ok(())
    }
}
