use thiserror;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Decrypt computed a tag that does not match the supplied one.
    /// No plaintext is returned in this case.
    #[error("authentication failed")]
    AuthenticationFailure,

    #[error("unsupported variant {0:?}")]
    UnsupportedVariant(String),
}

pub type Result<T> = core::result::Result<T, Error>;
