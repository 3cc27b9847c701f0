use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    InvalidInput { field: &'static str },
    Disposed,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidInput { field } => write!(f, "invalid frame input: {}", field),
            SceneError::Disposed => write!(f, "scene has been disposed"),
        }
    }
}

impl std::error::Error for SceneError {}
