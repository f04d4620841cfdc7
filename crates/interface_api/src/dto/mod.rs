//! Request/response data transfer objects
//!
//! DTOs are the JSON shapes of the HTTP API. They are kept apart from the
//! domain records and converted with `From` impls.

pub mod company;
pub mod employee;

use serde::Serialize;

/// Body returned by the save (upsert) endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    /// The store's success flag for the write that was performed
    pub saved: bool,
}
