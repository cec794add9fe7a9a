use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::data::models::row_model::RowModel;

/// Equality/range filters applied server-side by the backing store.
#[derive(Debug, Clone)]
pub enum RowFilter {
    Eq(&'static str, Value),
    /// Inclusive lower bound on a column (ISO-8601 for timestamps).
    Gte(&'static str, String),
    /// Inclusive upper bound on a column (ISO-8601 for timestamps).
    Lte(&'static str, String),
    /// Column value contained in the given set.
    In(&'static str, Vec<Value>),
}

#[derive(Debug, Clone)]
pub struct RowQuery {
    pub table: &'static str,
    pub filters: Vec<RowFilter>,
    pub limit: Option<u32>,
}

impl RowQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn filter(mut self, filter: RowFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Collaborator fetching snapshot row sets from named tables/views of the
/// remote backend. Keys are not guaranteed present and values may be numbers,
/// strings, or null; all tolerance lives on this side of the seam.
#[async_trait]
pub trait RowSetDatasource: Send + Sync {
    async fn fetch(&self, query: RowQuery) -> Result<Vec<RowModel>, ServerError>;
}
