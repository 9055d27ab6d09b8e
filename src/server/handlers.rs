//! Extractor error handlers
//!
//! Malformed paths, query strings and JSON bodies are rendered through
//! [`ServiceError`] so every 400 has the same shape.

use crate::utils::error::ServiceError;
use actix_web::{HttpRequest, error, web};

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            ServiceError::bad_request(format!("Invalid JSON body: {}", err)).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        ServiceError::bad_request(format!("Invalid query parameters: {}", err)).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        ServiceError::bad_request(format!("Invalid path parameter: {}", err)).into()
    })
}
