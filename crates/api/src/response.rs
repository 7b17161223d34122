//! The `{ "data": [...] }` envelope used by every collection endpoint.
//! Single resources are returned bare.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
