mod dataset;
mod loader;
mod schema;

pub use dataset::{Dataset, Row, Value};
pub use loader::{from_reader, load, LoadError};
pub use schema::{normalize_name, Column, ColumnKind, Schema, SchemaError};
