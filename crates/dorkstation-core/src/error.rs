use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown chip kind: {0}")]
    UnknownChipKind(String),

    #[error("Malformed chip spec '{0}': expected <kind>=<value>")]
    MalformedChipSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
