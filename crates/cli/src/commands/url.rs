use clap::Subcommand;
use std::io::Write;
use utilkit_core::Result;
use utilkit_utils::network::url;

#[derive(Subcommand)]
pub enum UrlCommands {
    /// Print the query parameters as a JSON object
    Params { url: String },
    /// Print the registrable domain (last two host labels)
    Domain { url: String },
    /// Resolve RELATIVE against BASE
    Resolve { base: String, relative: String },
    /// Print whether the input starts with a scheme
    IsAbsolute { url: String },
}

impl UrlCommands {
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        match self {
            UrlCommands::Params { url } => {
                let params = url::get_query_params(&url)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&params)?)?;
            }
            UrlCommands::Domain { url } => writeln!(out, "{}", url::get_domain(&url)?)?,
            UrlCommands::Resolve { base, relative } => {
                writeln!(out, "{}", url::resolve_relative_url(&base, &relative)?)?;
            }
            UrlCommands::IsAbsolute { url } => writeln!(out, "{}", url::is_absolute_url(&url))?,
        }
        Ok(())
    }
}
