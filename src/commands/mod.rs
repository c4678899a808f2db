//! Backend Command Wrappers
//!
//! Frontend bindings to the REST backend, organized by resource.

mod food;

use thiserror::Error;

pub use food::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("falha na requisição: {0}")]
    Transport(String),
    #[error("o servidor respondeu com status {0}")]
    Status(u16),
    #[error("resposta inesperada do servidor: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}
