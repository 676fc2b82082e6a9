#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error("no SQL input provided")]
    EmptyInput,

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
