use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
