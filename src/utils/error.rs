use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid Rating")]
    InvalidRating,

    #[error("Book with isbn {isbn} has already been created")]
    DuplicateIsbn { isbn: u64 },

    #[error("Provided e-mail: {email} is invalid")]
    InvalidEmail { email: String },

    #[error("User with e-mail {email} already exists")]
    DuplicateEmail { email: String },

    #[error("No user with email {email}")]
    UnknownUser { email: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Seed parsing error: {0}")]
    SeedParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
