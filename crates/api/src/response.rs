//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Envelope returned when a resource was created:
/// `{ "success": true, "message": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}
