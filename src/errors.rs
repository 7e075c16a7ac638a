use std::fmt;

#[derive(Debug)]
#[allow(dead_code)]
pub enum AppError {
    /// Network request or HTTP status failure
    FetchError(String),
    /// Page did not contain the expected table structure
    StructureError(String),
    /// No row with the expected column count was found
    HeaderNotFound(String),
    /// Race time string did not match the MM:SS format
    TimeParseError { value: String },
    /// Integer column contained non-numeric content
    TypeCoercionError { field: String, value: String },
    /// Invalid URL format
    UrlError(String),
    /// Regex compilation failed
    RegexError(String),
    /// Selector parsing failed
    SelectorError(String),
    /// Invalid input format
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FetchError(msg) => write!(f, "Fetch error: {msg}"),
            AppError::StructureError(msg) => write!(f, "Structure error: {msg}"),
            AppError::HeaderNotFound(msg) => write!(f, "Header row not found: {msg}"),
            AppError::TimeParseError { value } => {
                write!(f, "Time parse error: '{value}' is not a valid MM:SS race time")
            }
            AppError::TypeCoercionError { field, value } => {
                write!(
                    f,
                    "Type coercion error: field '{field}' has non-numeric value '{value}'"
                )
            }
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::RegexError(msg) => write!(f, "Regex error: {msg}"),
            AppError::SelectorError(msg) => write!(f, "CSS selector error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::RegexError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
