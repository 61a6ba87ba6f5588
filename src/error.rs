use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("no global {0}")]
    MissingGlobal(&'static str),

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("canvas #{0} has no 2d context")]
    NoContext(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = VizError> = std::result::Result<T, E>;
