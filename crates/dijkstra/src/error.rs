use thiserror::Error;

/// Coarse classification of [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InvalidArgument,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node `{name}` already exists")]
    DuplicateNode { name: String },

    #[error("node `{name}` is not in the graph")]
    UnknownNode { name: String },

    #[error("node `{name}` may not connect to itself")]
    SelfLoop { name: String },

    #[error("edge weight must be positive and finite, got {weight}")]
    InvalidWeight { weight: f64 },

    #[error("starting node `{name}` must be in the graph")]
    UnknownStart { name: String },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateNode { .. } => ErrorKind::DuplicateKey,
            Self::UnknownNode { .. } => ErrorKind::NotFound,
            Self::SelfLoop { .. } | Self::InvalidWeight { .. } | Self::UnknownStart { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
