use serde_derive::{Deserialize, Serialize};

/// One column of an index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    /// Field name.
    pub attribute: String,
    pub collate: Option<String>,
    pub length: Option<String>,
    pub order: Option<String>,
}

impl IndexField {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dialect", rename_all = "lowercase")]
pub enum IndexDialect {
    Postgres {
        indkey: String,
        definition: String,
    },
    Mysql {
        table_name: String,
        /// Usually `BTREE`.
        index_type: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub primary: bool,
    pub unique: bool,
    pub fields: Vec<IndexField>,
    pub dialect: Option<IndexDialect>,
}

impl IndexSpec {
    /// True when this is a unique, non-primary index over exactly `field`.
    pub fn is_unique_on(&self, field: &str) -> bool {
        self.unique
            && !self.primary
            && matches!(self.fields.as_slice(), [only] if only.attribute == field)
    }
}
