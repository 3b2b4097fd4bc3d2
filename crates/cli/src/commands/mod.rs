use clap::Subcommand;

pub mod bytes;
pub mod currency;
pub mod date;
pub mod encoding;
pub mod random;
pub mod url;
pub mod uuid;

use self::bytes::BytesCommands;
use self::currency::CurrencyArgs;
use self::date::DateCommands;
use self::encoding::Base64Commands;
use self::random::RandomCommands;
use self::url::UrlCommands;
use self::uuid::UuidArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert and format byte sizes
    #[command(visible_alias = "b")]
    Bytes {
        #[command(subcommand)]
        command: BytesCommands,
    },

    /// Format an amount of money
    Currency(CurrencyArgs),

    /// Encode, decode and validate base64
    Base64 {
        #[command(subcommand)]
        command: Base64Commands,
    },

    /// Generate a UUID
    #[command(disable_version_flag = true)]
    Uuid(UuidArgs),

    /// Generate random numbers and strings
    Random {
        #[command(subcommand)]
        command: RandomCommands,
    },

    /// Inspect and resolve URLs
    Url {
        #[command(subcommand)]
        command: UrlCommands,
    },

    /// Format dates and compute differences
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },
}
