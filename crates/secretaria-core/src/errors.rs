/// Classification of an [`AppError`].
///
/// Only the outer transport boundary cares about the kind (to pick a status
/// code); chat users only ever see the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    BadRequest,
    NotFound,
    UnprocessableEntity,
    InternalError,
    BadGateway,
}

impl StatusKind {
    pub fn status_code(self) -> u16 {
        match self {
            StatusKind::BadRequest => 400,
            StatusKind::NotFound => 404,
            StatusKind::UnprocessableEntity => 422,
            StatusKind::InternalError => 500,
            StatusKind::BadGateway => 502,
        }
    }
}

/// User-displayable failure of a command.
///
/// `Display` yields exactly the message so it can be sent back as reply text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    kind: StatusKind,
    message: String,
}

impl AppError {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusKind::NotFound, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusKind::UnprocessableEntity, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusKind::InternalError, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusKind::BadGateway, message)
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

/// Infrastructure error type (startup, adapters, transports).
///
/// Command-level failures that end up in front of the user are [`AppError`]s;
/// this type covers everything around them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
