use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResistanceError>;

#[derive(Error, Debug)]
pub enum ResistanceError {
    #[error("Invalid number of players: got {players}, game mode needs {expected}")]
    InvalidNumberOfPlayers { players: usize, expected: usize },

    #[error("Wildcard pool is empty but the game mode requires wildcards")]
    WildcardPoolEmpty,

    #[error("Game mode not found: {name}")]
    GameModeNotFound { name: String },

    #[error("No standard game mode for {0} players")]
    UnsupportedPlayerCount(usize),

    #[error("No players to assign roles to")]
    NoPlayers,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl ResistanceError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }
}
