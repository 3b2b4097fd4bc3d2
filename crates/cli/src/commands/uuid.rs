use ::uuid::Uuid;
use clap::{Args, ValueEnum};
use std::io::Write;
use utilkit_core::{Error, Result};
use utilkit_utils::random::uuid::{self as uuid_gen, DceDomain};

#[derive(Clone, Copy, ValueEnum)]
pub enum Namespace {
    Dns,
    Url,
    Oid,
    X500,
}

impl Namespace {
    fn uuid(self) -> Uuid {
        match self {
            Namespace::Dns => Uuid::NAMESPACE_DNS,
            Namespace::Url => Uuid::NAMESPACE_URL,
            Namespace::Oid => Uuid::NAMESPACE_OID,
            Namespace::X500 => Uuid::NAMESPACE_X500,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Domain {
    Person,
    Group,
    Org,
}

impl From<Domain> for DceDomain {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Person => DceDomain::Person,
            Domain::Group => DceDomain::Group,
            Domain::Org => DceDomain::Org,
        }
    }
}

#[derive(Args)]
pub struct UuidArgs {
    /// UUID version, 1 to 6
    #[arg(long = "version", default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=6))]
    version: u8,

    /// Namespace for versions 3 and 5
    #[arg(long, value_enum, default_value = "dns")]
    namespace: Namespace,

    /// Name for versions 3 and 5
    #[arg(long)]
    name: Option<String>,

    /// DCE domain for version 2
    #[arg(long, value_enum, default_value = "person")]
    domain: Domain,

    /// Local identifier (uid/gid) for version 2
    #[arg(long, default_value_t = 0)]
    id: u32,

    /// How many UUIDs to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

impl UuidArgs {
    fn generate(&self) -> Result<Uuid> {
        let name = || {
            self.name.as_deref().ok_or_else(|| {
                Error::invalid_input("uuid", format!("version {} requires --name", self.version))
            })
        };
        match self.version {
            1 => uuid_gen::v1(),
            2 => uuid_gen::v2(self.domain.into(), self.id),
            3 => Ok(uuid_gen::v3(&self.namespace.uuid(), name()?)),
            4 => Ok(uuid_gen::v4()),
            5 => Ok(uuid_gen::v5(&self.namespace.uuid(), name()?)),
            6 => uuid_gen::v6(),
            other => Err(Error::out_of_range("uuid", other, "version must be 1 to 6")),
        }
    }

    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        for _ in 0..self.count {
            writeln!(out, "{}", self.generate()?)?;
        }
        Ok(())
    }
}
