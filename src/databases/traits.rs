use super::table::Row;

#[cfg_attr(test, mockall::automock)]
pub trait DBSession: Send {
    /// Runs a batch of statements as plain SQL and drops any results.
    fn execute_batch(&mut self, query: &str) -> anyhow::Result<()>;

    /// Runs a query and returns the first row of its first result set.
    fn fetch_first(&mut self, query: &str) -> anyhow::Result<Option<Row>>;
}
