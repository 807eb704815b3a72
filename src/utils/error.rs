use thiserror::Error;

#[derive(Error, Debug)]
pub enum BumpError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Descriptor is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Version node not found in {path}")]
    MissingVersionNode { path: String },

    #[error("Version property `{name}` is not defined in {path}")]
    UnresolvedProperty { name: String, path: String },

    #[error("No version line found in {path}")]
    MissingVersionLine { path: String },

    #[error("Invalid version format: `{value}`")]
    InvalidVersionFormat { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: `{value}` ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, BumpError>;
