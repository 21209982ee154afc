use sea_query::{backend::QueryBuilder, ColumnDef, ColumnSpec, ColumnType, SqliteQueryBuilder};

use crate::types::ColumnDescription;

/// Describe a sea-query column the way the model builder expects.
pub fn describe_column(column: &ColumnDef) -> ColumnDescription {
    let mut description = ColumnDescription {
        column_type: column
            .get_column_type()
            .map(sql_type_name)
            .unwrap_or_default(),
        allow_null: true,
        ..Default::default()
    };

    match column.get_column_type() {
        Some(ColumnType::Enum(_, variants)) => description.special = variants.clone(),
        Some(ColumnType::Array(element)) => description.element_type = element.clone(),
        _ => {}
    }

    for spec in column.get_column_spec() {
        match spec {
            ColumnSpec::Null => description.allow_null = true,
            ColumnSpec::NotNull => description.allow_null = false,
            ColumnSpec::PrimaryKey => {
                description.primary_key = true;
                description.allow_null = false;
            }
            ColumnSpec::AutoIncrement => description.auto_increment = true,
            ColumnSpec::Default(value) => {
                description.default_value = Some(SqliteQueryBuilder.value_to_string(value))
            }
            ColumnSpec::Extra(extra) => description.extra = Some(extra.clone()),
            _ => {}
        }
    }

    description
}

pub fn is_unique_column(column: &ColumnDef) -> bool {
    column
        .get_column_spec()
        .iter()
        .any(|spec| matches!(spec, ColumnSpec::UniqueKey))
}

fn sql_type_name(column_type: &ColumnType) -> String {
    let name = match column_type {
        ColumnType::Char(Some(len)) => return format!("CHAR({})", len),
        ColumnType::String(Some(len)) => return format!("VARCHAR({})", len),
        ColumnType::Char(..) => "CHAR",
        ColumnType::String(..) => "VARCHAR",
        ColumnType::Text => "TEXT",
        ColumnType::TinyInteger(..) => "TINYINT",
        ColumnType::SmallInteger(..) => "SMALLINT",
        ColumnType::Integer(..) => "INTEGER",
        ColumnType::BigInteger(..) => "BIGINT",
        ColumnType::Float(..) => "FLOAT",
        ColumnType::Double(..) => "DOUBLE",
        ColumnType::Decimal(..) => "DECIMAL",
        ColumnType::DateTime(..) => "DATETIME",
        ColumnType::Timestamp(..) => "TIMESTAMP",
        ColumnType::Time(..) => "TIME",
        ColumnType::Date => "DATE",
        ColumnType::Binary(..) => "BLOB",
        ColumnType::Boolean => "BOOLEAN",
        ColumnType::Json => "JSON",
        ColumnType::Uuid => "UUID",
        ColumnType::Enum(..) => "ENUM",
        ColumnType::Array(..) => "ARRAY",
        ColumnType::Custom(iden) => return iden.to_string(),
        other => {
            let debug = format!("{:?}", other);
            let variant: String = debug.chars().take_while(|c| c.is_alphanumeric()).collect();
            return variant.to_uppercase();
        }
    };
    name.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Alias;

    #[test]
    fn describes_primary_key() {
        let column = ColumnDef::new(Alias::new("id"))
            .integer()
            .not_null()
            .auto_increment()
            .primary_key()
            .to_owned();
        let description = describe_column(&column);

        assert_eq!(description.column_type, "INTEGER");
        assert!(!description.allow_null);
        assert!(description.primary_key);
        assert!(description.auto_increment);
        assert!(!is_unique_column(&column));
    }

    #[test]
    fn describes_nullable_unique_column() {
        let column = ColumnDef::new(Alias::new("email"))
            .string_len(120)
            .unique_key()
            .to_owned();
        let description = describe_column(&column);

        assert_eq!(description.column_type, "VARCHAR(120)");
        assert!(description.allow_null);
        assert!(!description.primary_key);
        assert!(description.default_value.is_none());
        assert!(is_unique_column(&column));
    }

    #[test]
    fn keeps_enum_values() {
        let column = ColumnDef::new(Alias::new("mood"))
            .enumeration("mood", ["happy", "sad"])
            .to_owned();
        let description = describe_column(&column);

        assert_eq!(description.column_type, "ENUM");
        assert_eq!(description.special, vec!["happy".to_owned(), "sad".to_owned()]);
        assert!(description.element_type.is_none());
    }

    #[test]
    fn keeps_array_element_type() {
        let column = ColumnDef::new(Alias::new("tags")).array("text".to_owned()).to_owned();
        let description = describe_column(&column);

        assert_eq!(description.column_type, "ARRAY");
        assert_eq!(description.element_type.as_deref(), Some("text"));
        assert!(description.special.is_empty());
    }

    #[test]
    fn renders_default_as_sql() {
        let column = ColumnDef::new(Alias::new("status"))
            .string()
            .default("none")
            .to_owned();
        assert_eq!(describe_column(&column).default_value.as_deref(), Some("'none'"));

        let column = ColumnDef::new(Alias::new("plays"))
            .integer()
            .default(0)
            .to_owned();
        assert_eq!(describe_column(&column).default_value.as_deref(), Some("0"));
    }

    #[test]
    fn keeps_extra_clause() {
        let column = ColumnDef::new(Alias::new("updated_at"))
            .timestamp()
            .extra("ON UPDATE CURRENT_TIMESTAMP".to_owned())
            .to_owned();
        assert_eq!(
            describe_column(&column).extra.as_deref(),
            Some("ON UPDATE CURRENT_TIMESTAMP")
        );
    }

    #[test]
    fn untyped_column_has_empty_type() {
        let column = ColumnDef::new(Alias::new("misc")).to_owned();
        assert_eq!(describe_column(&column).column_type, "");
    }
}
