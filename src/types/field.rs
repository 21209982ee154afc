use serde_derive::{Deserialize, Serialize};

/// Column as described by the schema layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescription {
    /// SQL type name, e.g. `INTEGER` or `VARCHAR(255)`.
    pub column_type: String,
    pub allow_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub comment: Option<String>,
    /// Enum values.
    pub special: Vec<String>,
    /// Element type of array columns.
    pub element_type: Option<String>,
    /// Dialect-specific column clause such as `ON UPDATE CURRENT_TIMESTAMP`.
    pub extra: Option<String>,
}

/// Key constraint attached to a single column.
///
/// The schema import fills the table, column, target and flag fields; `constraint_name`
/// is left to callers that read it from the database catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeySpec {
    pub constraint_name: Option<String>,
    pub source_schema: Option<String>,
    pub source_table: String,
    pub source_column: String,
    pub target_schema: Option<String>,
    pub target_table: Option<String>,
    pub target_column: Option<String>,
    pub is_foreign_key: bool,
    pub is_primary_key: bool,
    pub is_serial_key: bool,
    pub is_unique: bool,
    pub extra: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub description: ColumnDescription,
    pub foreign_key: Option<ForeignKeySpec>,
    /// Enum values or other dialect-specific markers.
    pub special: Vec<String>,
    /// Element type of array and enum columns.
    pub element_type: Option<String>,
    pub unique: bool,
}

impl Field {
    pub fn is_foreign_key(&self) -> bool {
        self.foreign_key
            .as_ref()
            .map_or(false, |fk| fk.is_foreign_key)
    }
}

impl From<ColumnDescription> for Field {
    fn from(description: ColumnDescription) -> Self {
        Self {
            special: description.special.clone(),
            element_type: description.element_type.clone(),
            description,
            ..Default::default()
        }
    }
}
