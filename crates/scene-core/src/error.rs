use thiserror::Error;

/// Recoverable failures a scene can run into.
///
/// None of these are fatal to the page: the owning scene logs the error and
/// either keeps running with defaults or stays visually incomplete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid value {value:?} for parameter `{key}`")]
    InvalidParam { key: String, value: String },
    #[error("failed to load asset {url}")]
    AssetLoad { url: String },
    #[error("missing rendering context: {0}")]
    MissingContext(&'static str),
}

pub type SceneResult<T> = Result<T, SceneError>;
