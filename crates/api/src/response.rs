//! Shared response envelope types for API handlers.
//!
//! Every JSON success body is wrapped as `{ "data": ... }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Plain acknowledgement body, e.g. after a contact form submission.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
