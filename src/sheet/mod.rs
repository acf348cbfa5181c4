//! Spreadsheet ingestion: tolerant CSV parsing and header-role resolution

pub mod columns;
pub mod reader;

pub use columns::{find_header_index, normalize_header, resolve_role, RoleSpec};
pub use reader::{parse_csv, strip_empty_columns, RawGrid};
