pub mod column_mapping;
pub mod database_schema;
pub mod error;
pub mod logging;
pub mod recase;
pub mod types;

pub use error::{Error, Result};
pub use recase::{recase, recase_with, InflectorSingularizer, Singularize};
pub use types::{
    qname_split, AutoOptions, CaseOption, ColumnDescription, Dialect, Field, ForeignKeySpec,
    IndexDialect, IndexField, IndexSpec, LangOption, Table, TableData,
};
