use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use super::field::{ColumnDescription, Field, ForeignKeySpec};
use super::index_spec::IndexSpec;

/// Everything gathered about the tables of one database, keyed by table name.
///
/// Filled incrementally by the schema import; nothing checks that the maps agree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub tables: BTreeMap<String, BTreeMap<String, ColumnDescription>>,
    pub foreign_keys: BTreeMap<String, BTreeMap<String, ForeignKeySpec>>,
    pub has_trigger_tables: BTreeMap<String, bool>,
    pub indexes: BTreeMap<String, Vec<IndexSpec>>,
    /// Generated text by name.
    pub text: Option<BTreeMap<String, String>>,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn has_trigger(&self, table: &str) -> bool {
        self.has_trigger_tables.get(table).copied().unwrap_or(false)
    }

    pub fn add_index(&mut self, table: &str, index: IndexSpec) {
        self.indexes.entry(table.to_owned()).or_default().push(index);
    }

    pub fn set_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.text
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), text.into());
    }

    /// Columns of `table` joined with their key constraint and uniqueness.
    pub fn fields(&self, table: &str) -> BTreeMap<String, Field> {
        let columns = match self.tables.get(table) {
            Some(columns) => columns,
            None => return BTreeMap::new(),
        };
        let foreign_keys = self.foreign_keys.get(table);
        let indexes = self.indexes.get(table).map(Vec::as_slice).unwrap_or_default();

        columns
            .iter()
            .map(|(name, description)| {
                let foreign_key = foreign_keys.and_then(|fks| fks.get(name)).cloned();
                let unique = indexes.iter().any(|index| index.is_unique_on(name))
                    || foreign_key.as_ref().map_or(false, |fk| fk.is_unique);

                let field = Field {
                    foreign_key,
                    unique,
                    ..Field::from(description.clone())
                };
                (name.clone(), field)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndexField;

    fn column(column_type: &str) -> ColumnDescription {
        ColumnDescription {
            column_type: column_type.into(),
            allow_null: true,
            ..Default::default()
        }
    }

    fn sample() -> TableData {
        let mut data = TableData::new();
        let columns = data.tables.entry("track".into()).or_default();
        columns.insert("id".into(), column("INTEGER"));
        columns.insert("album_id".into(), column("INTEGER"));
        columns.insert("isrc".into(), column("TEXT"));

        data.foreign_keys.entry("track".into()).or_default().insert(
            "album_id".into(),
            ForeignKeySpec {
                source_table: "track".into(),
                source_column: "album_id".into(),
                target_table: Some("album".into()),
                target_column: Some("id".into()),
                is_foreign_key: true,
                ..Default::default()
            },
        );
        data.add_index(
            "track",
            IndexSpec {
                name: "track_isrc".into(),
                unique: true,
                fields: vec![IndexField::new("isrc")],
                ..Default::default()
            },
        );
        data.add_index(
            "track",
            IndexSpec {
                name: "track_pkey".into(),
                primary: true,
                unique: true,
                fields: vec![IndexField::new("id")],
                ..Default::default()
            },
        );
        data
    }

    #[test]
    fn starts_empty() {
        let data = TableData::new();
        assert!(data.tables.is_empty());
        assert!(data.foreign_keys.is_empty());
        assert!(data.indexes.is_empty());
        assert!(data.has_trigger_tables.is_empty());
        assert!(data.text.is_none());
    }

    #[test]
    fn merges_foreign_keys_and_unique_indexes() {
        let fields = sample().fields("track");
        assert_eq!(fields.len(), 3);

        let album_id = &fields["album_id"];
        assert!(album_id.is_foreign_key());
        assert!(!album_id.unique);

        assert!(fields["isrc"].unique);
        assert!(fields["isrc"].foreign_key.is_none());
        // primary key indexes do not mark a column unique
        assert!(!fields["id"].unique);
    }

    #[test]
    fn carries_enum_values_and_element_type() {
        let mut data = sample();
        let columns = data.tables.get_mut("track").unwrap();
        columns.insert(
            "mood".into(),
            ColumnDescription {
                column_type: "ENUM".into(),
                special: vec!["happy".into(), "sad".into()],
                ..Default::default()
            },
        );
        columns.insert(
            "tags".into(),
            ColumnDescription {
                column_type: "ARRAY".into(),
                element_type: Some("text".into()),
                ..Default::default()
            },
        );

        let fields = data.fields("track");
        assert_eq!(fields["mood"].special, vec!["happy".to_owned(), "sad".to_owned()]);
        assert_eq!(fields["tags"].element_type.as_deref(), Some("text"));
        assert!(fields["isrc"].special.is_empty());
    }

    #[test]
    fn unknown_table_has_no_fields() {
        let data = sample();
        assert!(data.fields("album").is_empty());
        assert!(!data.has_trigger("album"));
        assert_eq!(data.table_names().collect::<Vec<_>>(), vec!["track"]);
    }

    #[test]
    fn collects_generated_text() {
        let mut data = TableData::new();
        data.set_text("track", "model source");
        assert_eq!(data.text.unwrap()["track"], "model source");
    }
}
