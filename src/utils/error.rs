use crate::domain::model::SpaceId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Space {0} not found")]
    SpaceNotFound(i64),

    #[error("Space {0} is already occupied")]
    SpaceAlreadyOccupied(SpaceId),

    #[error("Space {0} is not occupied")]
    SpaceNotOccupied(SpaceId),

    #[error("Invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Console task failed: {message}")]
    TaskError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ParkingError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ParkingError::SpaceNotFound(_) => "Space not found.".to_string(),
            ParkingError::SpaceAlreadyOccupied(_) => "Space not available.".to_string(),
            ParkingError::SpaceNotOccupied(_) => "Space is not occupied.".to_string(),
            ParkingError::InvalidMenuChoice(_) => "Invalid choice.".to_string(),
            ParkingError::IoError(e) => format!("Console I/O failed: {}", e),
            ParkingError::TaskError { message } => format!("Console stopped unexpectedly: {}", message),
            ParkingError::ConfigError { message } => format!("Configuration problem: {}", message),
            ParkingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// 是否為單次操作內即可恢復的錯誤
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParkingError::SpaceNotFound(_)
                | ParkingError::SpaceAlreadyOccupied(_)
                | ParkingError::SpaceNotOccupied(_)
                | ParkingError::InvalidMenuChoice(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_console_messages() {
        assert_eq!(ParkingError::SpaceNotFound(4).user_friendly_message(), "Space not found.");
        assert_eq!(
            ParkingError::SpaceAlreadyOccupied(4).user_friendly_message(),
            "Space not available."
        );
        assert_eq!(
            ParkingError::SpaceNotOccupied(4).user_friendly_message(),
            "Space is not occupied."
        );
        assert_eq!(
            ParkingError::InvalidMenuChoice("x".into()).user_friendly_message(),
            "Invalid choice."
        );
    }

    #[test]
    fn test_only_domain_errors_are_recoverable() {
        assert!(ParkingError::SpaceNotOccupied(1).is_recoverable());
        assert!(!ParkingError::ConfigError { message: "bad".into() }.is_recoverable());
    }
}
