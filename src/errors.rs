use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("group error: {0}")]
    Group(#[from] GroupError),

    #[error("player error: {0}")]
    Player(#[from] PlayerError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

impl AppError {
    /// Business-rule violations the caller is expected to show to the user.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            AppError::Group(GroupError::AlreadyExists(_))
                | AppError::Player(PlayerError::AlreadyExists { .. })
        )
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::IO(_))
    }
}

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("group '{0}' already exists")]
    AlreadyExists(String),
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player '{name}' already exists in team '{team}' of group '{group}'")]
    AlreadyExists {
        name: String,
        team: String,
        group: String,
    },
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("encoding error: {0}")]
    EncodingError(String),
    #[error("{0}")]
    Msg(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Error(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}
