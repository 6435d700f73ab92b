use std::str::FromStr;

use actix_web::{http::StatusCode, web::Json, HttpResponse, ResponseError};
use domain_inventory::exception::InventoryException;
use domain_servicing::{
    exception::{ErrorKind, ServicingException},
    model::vo::{MessageStatus, ServiceStatus, ValidationErrors},
};
use servicing_architecture::response::ResponseBase;
use uuid::Uuid;

pub mod dtos;
pub mod inventory;
pub mod maintenance;
pub mod messages;
pub mod notification;
pub mod registry;
pub mod services;

pub type ApiResult<T> = Result<Json<ResponseBase<T>>, ApiError>;

fn ok<T>(content: T) -> ApiResult<T> {
    Ok(Json(ResponseBase::ok(Some(content))))
}

/// A failed request, as it is sent back in the response envelope.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    status: i32,
    message: String,
    violations: Option<ValidationErrors>,
}

impl ApiError {
    fn invalid_request(field: &str, message: String) -> Self {
        let violations = ValidationErrors::single(field, message.clone());
        Self {
            kind: ErrorKind::Validation,
            status: 400,
            message,
            violations: Some(violations),
        }
    }
}

impl From<ServicingException> for ApiError {
    fn from(e: ServicingException) -> Self {
        let violations = match &e {
            ServicingException::Validation(v) => Some(v.clone()),
            _ => None,
        };
        Self {
            kind: e.kind(),
            status: e.status(),
            message: e.to_string(),
            violations,
        }
    }
}

impl From<InventoryException> for ApiError {
    fn from(e: InventoryException) -> Self {
        let violations = match &e {
            InventoryException::Validation(v)
            | InventoryException::Servicing(ServicingException::Validation(v)) => Some(v.clone()),
            _ => None,
        };
        Self {
            kind: e.kind(),
            status: e.status(),
            message: e.to_string(),
            violations,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind == ErrorKind::Internal {
            tracing::error!(status = self.status, "{}", self.message);
        }
        let body = ResponseBase::new(self.status, &self.message, self.violations.clone());
        HttpResponse::build(self.status_code()).json(body)
    }
}

fn extract_uuid(s: &str) -> Result<Uuid, ApiError> {
    Uuid::from_str(s).map_err(|e| {
        ApiError::invalid_request("id", format!(r#"error when parse uuid from "{s}": {e}"#))
    })
}

fn extract_status(s: &str) -> Result<ServiceStatus, ApiError> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
        ApiError::invalid_request("status", format!(r#""{s}" is not a service status"#))
    })
}

fn extract_message_status(s: &str) -> Result<MessageStatus, ApiError> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
        ApiError::invalid_request("status", format!(r#""{s}" is not a message status"#))
    })
}
