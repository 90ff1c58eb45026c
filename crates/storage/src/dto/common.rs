use serde::Deserialize;
use utoipa::IntoParams;

/// Optional listing window. Without `limit` every row after `offset` is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of items to return (1-100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

impl ListParams {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && !(1..=Self::MAX_LIMIT).contains(&limit)
        {
            return Err(format!("limit must be between 1 and {}", Self::MAX_LIMIT));
        }
        Ok(())
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// SQL `LIMIT` bind value; `NULL` means no limit in Postgres.
    pub fn sql_limit(&self) -> Option<i64> {
        self.limit.map(i64::from)
    }

    pub fn sql_offset(&self) -> i64 {
        i64::from(self.offset())
    }

    /// Applies the window to an already ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let rest = items.into_iter().skip(self.offset() as usize);
        match self.limit {
            Some(limit) => rest.take(limit as usize).collect(),
            None => rest.collect(),
        }
    }
}
