use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid record at index {index}: field `{field}` {reason}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Malformed record payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("No topic found with title: {0}")]
    TopicNotFound(String),

    #[error("Topic title already exists: {0}")]
    TopicTitleExists(String),

    #[error("Message not found: {0}")]
    MessageNotFound(i64),

    #[error("Topic id already exists: {0}")]
    TopicIdExists(i64),

    #[error("Message id already exists: {0}")]
    MessageIdExists(i64),

    #[error("No {0} ids left to allocate")]
    IdsExhausted(&'static str),

    #[error("Username does not meet requirements: {0}")]
    InvalidUsername(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
