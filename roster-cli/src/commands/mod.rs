pub mod migrate;
pub mod serve;

/// File-backed database in the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://students.db";
