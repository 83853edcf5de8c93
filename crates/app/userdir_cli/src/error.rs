use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("{message} [{}]", code.as_deref().unwrap_or("UNKNOWN"))]
    GraphQl { message: String, code: Option<String> },

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Http: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
