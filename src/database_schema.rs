use std::collections::BTreeMap;

use sea_query::{
    ForeignKeyCreateStatement, IndexCreateStatement, TableCreateStatement, TableForeignKey,
};
use sea_schema::sqlite::def::{Schema, TableDef};
use tracing::{debug, trace};

use crate::column_mapping::{describe_column, is_unique_column};
use crate::types::{
    AutoOptions, ColumnDescription, ForeignKeySpec, IndexField, IndexSpec, TableData,
};

impl TableData {
    /// Record the columns and key constraints of one table.
    pub fn add_table(&mut self, name: &str, table_create_stmt: &TableCreateStatement) {
        let mut columns = BTreeMap::new();
        let mut keys: BTreeMap<String, ForeignKeySpec> = BTreeMap::new();

        for column in table_create_stmt.get_columns() {
            let column_name = column.get_column_name();
            let description = describe_column(column);
            let unique = is_unique_column(column);

            if description.primary_key || unique {
                keys.insert(
                    column_name.clone(),
                    ForeignKeySpec {
                        source_table: name.to_owned(),
                        source_column: column_name.clone(),
                        is_primary_key: description.primary_key,
                        is_serial_key: description.primary_key && description.auto_increment,
                        is_unique: unique,
                        extra: description.extra.clone(),
                        ..Default::default()
                    },
                );
            }
            columns.insert(column_name, description);
        }

        let foreign_keys = table_create_stmt
            .get_foreign_key_create_stmts()
            .iter()
            .map(ForeignKeyCreateStatement::get_foreign_key)
            .flat_map(|fk| parse_table_fk(name, fk));

        for foreign_key in foreign_keys {
            match keys.get_mut(&foreign_key.source_column) {
                Some(existing) => {
                    existing.is_foreign_key = true;
                    existing.target_table = foreign_key.target_table;
                    existing.target_column = foreign_key.target_column;
                }
                None => {
                    let extra = columns
                        .get(&foreign_key.source_column)
                        .and_then(|column: &ColumnDescription| column.extra.clone());
                    keys.insert(
                        foreign_key.source_column.clone(),
                        ForeignKeySpec {
                            extra,
                            ..foreign_key
                        },
                    );
                }
            }
        }

        for index in table_create_stmt.get_indexes() {
            self.add_index(name, index_spec(name, index));
        }

        trace!(table = name, columns = columns.len(), keys = keys.len(), "added table");

        self.tables.insert(name.to_owned(), columns);
        self.foreign_keys.insert(name.to_owned(), keys);
        self.has_trigger_tables.entry(name.to_owned()).or_insert(false);
    }
}

/// sea-query keeps index names private, so the spec is named after its table and columns.
fn index_spec(table: &str, index: &IndexCreateStatement) -> IndexSpec {
    let column_names = index.get_index_spec().get_column_names();

    IndexSpec {
        name: format!("{}_{}", table, column_names.join("_")),
        primary: index.is_primary_key(),
        unique: index.is_unique_key(),
        fields: column_names.into_iter().map(IndexField::new).collect(),
        dialect: None,
    }
}

/// One spec per column of `fk`, paired positionally with the referenced columns.
fn parse_table_fk(source_table: &str, fk: &TableForeignKey) -> Vec<ForeignKeySpec> {
    let target_table = fk.get_ref_table().map(|table| table.to_string());
    let ref_columns = fk.get_ref_columns();

    fk.get_columns()
        .into_iter()
        .enumerate()
        .map(|(position, column)| ForeignKeySpec {
            source_table: source_table.to_owned(),
            source_column: column.to_string(),
            target_table: target_table.clone(),
            target_column: ref_columns.get(position).map(|c| c.to_string()),
            is_foreign_key: true,
            ..Default::default()
        })
        .collect()
}

pub fn table_data_from_statements<I>(tables: I, options: &AutoOptions) -> TableData
where
    I: IntoIterator<Item = (String, TableCreateStatement)>,
{
    let mut table_data = TableData::new();

    for (name, table_create_stmt) in tables {
        if !options.includes_table(&name) {
            debug!(table = %name, "skipping table");
            continue;
        }
        table_data.add_table(&name, &table_create_stmt);

        if let Some(schema) = &options.schema {
            let keys = table_data.foreign_keys.entry(name).or_default();
            for key in keys.values_mut() {
                key.source_schema = Some(schema.clone());
                if key.is_foreign_key {
                    key.target_schema = Some(schema.clone());
                }
            }
        }
    }

    table_data
}

/// Build table data from an already discovered SQLite schema.
pub fn table_data_from_sqlite(schema: &Schema, options: &AutoOptions) -> TableData {
    let tables = schema
        .tables
        .iter()
        .map(|table: &TableDef| (table.name.clone(), table.write()));

    table_data_from_statements(tables, options)
}
