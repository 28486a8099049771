use crate::domain::entities::country::Country;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

pub trait CountrySource: Send + Sync {
    fn load(&self) -> Result<Vec<Country>, SourceError>;
}
