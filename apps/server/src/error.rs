use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketlens_core::errors::{DatabaseError, Error as CoreError, MarketDataError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// A core failure reported under a fixed prefix, e.g. `Error checking API status: ...`
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        source: CoreError,
    },
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

impl ApiError {
    pub fn context(context: &'static str, source: CoreError) -> Self {
        ApiError::Context { context, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) | ApiError::Context { source: e, .. } => core_status(e),
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Core(e) => core_message(e),
            ApiError::Context { context, source } => {
                format!("{}: {}", context, core_message(source))
            }
            _ => self.to_string(),
        }
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        ApiError::Core(CoreError::MarketData(err))
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        CoreError::ConstraintViolation(_)
        | CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
        CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::MarketData(e) => match e {
            MarketDataError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketDataError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            MarketDataError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            MarketDataError::InvalidParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Market data errors are reported without the core wrapper prefix.
fn core_message(err: &CoreError) -> String {
    match err {
        CoreError::MarketData(e) => e.to_string(),
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
