/// Alias for `Result<T, GmError>`.
pub type GmResult<T> = Result<T, GmError>;

/// Errors that can occur while building or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum GmError {
    /// A scene with the same identifier already exists.
    #[error("scene already exists: \"{0}\"")]
    DuplicateScene(String),

    /// Two choices in one scene share an identifier.
    #[error("scene \"{scene}\" declares choice \"{choice}\" more than once")]
    DuplicateChoice {
        /// The owning scene.
        scene: String,
        /// The repeated choice identifier.
        choice: String,
    },

    /// The declared entry scene is not part of the world.
    #[error("entry scene not found: \"{0}\"")]
    MissingEntry(String),

    /// The world file could not be parsed.
    #[error("invalid world file: {0}")]
    Json(#[from] serde_json::Error),

    /// The world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),
}
