pub mod mssql;
pub mod table;
pub mod traits;
