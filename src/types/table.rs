use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: Option<String>,
    pub table_name: String,
    pub table_schema: Option<String>,
}

impl Table {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub fn from_qualified(qname: &str) -> Self {
        let (schema, table_name) = qname_split(qname);
        Self {
            name: None,
            table_name: table_name.to_owned(),
            table_schema: schema.map(str::to_owned),
        }
    }

    /// `schema.table` when the schema is known, otherwise just the table name.
    pub fn qualified_name(&self) -> String {
        match &self.table_schema {
            Some(schema) => format!("{}.{}", schema, self.table_name),
            None => self.table_name.clone(),
        }
    }
}

/// Split `schema.table` into its schema and table parts.
///
/// Only the first two dot-separated segments are used, so `a.b.c` yields `(Some("a"), "b")`.
/// A name without a dot after its first character has no schema.
pub fn qname_split(qname: &str) -> (Option<&str>, &str) {
    match qname.find('.') {
        Some(dot) if dot > 0 => {
            let rest = &qname[dot + 1..];
            let table = rest.find('.').map_or(rest, |end| &rest[..end]);
            (Some(&qname[..dot]), table)
        }
        _ => (None, qname),
    }
}
