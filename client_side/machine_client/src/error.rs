use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("machine unreachable: {0}")]
    Network(String),
    #[error("machine responded with status {status}: {detail}")]
    Protocol { status: u16, detail: String },
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("invalid trigger name {0:?}")]
    InvalidTrigger(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
