use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Login field {0} is not set, pass it on the command line or put it into the PWD file")]
    MissingLogin(&'static str),
    #[error("Invalid server address {0:?}")]
    InvalidServer(String),
    #[error("Query returned no rows: {0}")]
    NoRows(String),
    #[error("Column {column} not found in the result of: {query}")]
    MissingColumn { column: String, query: String },
    #[error("Unsupported mssql column type for {0}")]
    UnsupportedType(String),
}
