use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Subcommand;
use std::io::Write;
use utilkit_core::{Error, Result, ResultExt};
use utilkit_utils::date;

const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let date_only = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0));
    date_only
        .or_else(|| {
            INPUT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        })
        .ok_or_else(|| Error::parse(input, "expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"))
}

#[derive(Subcommand)]
pub enum DateCommands {
    /// Render a date with YYYY, MM, DD, HH, mm and ss tokens
    Format {
        pattern: String,
        /// Date to format instead of now (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the absolute difference between two dates as JSON
    Diff { from: String, to: String },
}

impl DateCommands {
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        match self {
            DateCommands::Format { pattern, at } => {
                let value = match at {
                    Some(input) => parse_datetime(&input)?,
                    None => Local::now().naive_local(),
                };
                writeln!(out, "{}", date::format(&value, &pattern))?;
            }
            DateCommands::Diff { from, to } => {
                let from = parse_datetime(&from).context("FROM")?;
                let to = parse_datetime(&to).context("TO")?;
                let diff = date::date_diff(from, to);
                writeln!(out, "{}", serde_json::to_string(&diff)?)?;
            }
        }
        Ok(())
    }
}
