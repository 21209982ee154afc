pub mod field;
pub mod index_spec;
pub mod options;
pub mod table;
pub mod table_data;

pub use field::{ColumnDescription, Field, ForeignKeySpec};
pub use index_spec::{IndexDialect, IndexField, IndexSpec};
pub use options::{AutoOptions, CaseOption, Dialect, LangOption};
pub use table::{qname_split, Table};
pub use table_data::TableData;
