use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Broker unavailable for destination '{destination}' {location}")]
    BrokerUnavailable {
        destination: String,
        location: ErrorLocation,
    },
}

impl BridgeError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BrokerUnavailable { .. } => "BROKER_UNAVAILABLE",
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
