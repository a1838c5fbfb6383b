use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid operand `{text}`")]
    InvalidOperand {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected an operand, found end of input")]
    MissingOperand,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
