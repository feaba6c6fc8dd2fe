//! Error types for the converter pipeline

use crate::constants::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("encoder produced no output")]
    Encode,

    #[error("conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Text shown in the notification dialog
    pub fn user_message(&self) -> &'static str {
        match self {
            ConvertError::NoFileSelected => MSG_NO_FILE,
            ConvertError::Decode(_) => MSG_DECODE_FAILED,
            ConvertError::Encode | ConvertError::Task(_) => MSG_ENCODE_FAILED,
            ConvertError::Io(_) => MSG_DOWNLOAD_FAILED,
        }
    }
}
