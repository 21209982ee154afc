use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::recase::recase;

/// Identifier casing applied to file, model and property names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseOption {
    /// camelCase
    #[serde(rename = "c", alias = "camel")]
    Camel,
    /// lower_case
    #[serde(rename = "l", alias = "lower", alias = "snake")]
    Lower,
    /// as named in the database
    #[serde(rename = "o", alias = "original")]
    Original,
    /// PascalCase
    #[serde(rename = "p", alias = "pascal")]
    Pascal,
    /// UPPER_CASE
    #[serde(rename = "u", alias = "upper")]
    Upper,
}

impl CaseOption {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseOption::Camel => "c",
            CaseOption::Lower => "l",
            CaseOption::Original => "o",
            CaseOption::Pascal => "p",
            CaseOption::Upper => "u",
        }
    }
}

impl FromStr for CaseOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "c" | "camel" => Ok(CaseOption::Camel),
            "l" | "lower" | "snake" => Ok(CaseOption::Lower),
            "o" | "original" => Ok(CaseOption::Original),
            "p" | "pascal" => Ok(CaseOption::Pascal),
            "u" | "upper" => Ok(CaseOption::Upper),
            other => Err(Error::UnknownCaseOption(other.to_owned())),
        }
    }
}

impl fmt::Display for CaseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the generated model files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangOption {
    #[default]
    Es5,
    Es6,
    Esm,
    Ts,
}

impl FromStr for LangOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "es5" => Ok(LangOption::Es5),
            "es6" => Ok(LangOption::Es6),
            "esm" => Ok(LangOption::Esm),
            "ts" => Ok(LangOption::Ts),
            other => Err(Error::UnknownLang(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Mysql,
    Mariadb,
    #[serde(alias = "postgresql")]
    Postgres,
    Sqlite,
    Mssql,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Mariadb => "mariadb",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::Mssql => "mssql",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mysql" => Ok(Dialect::Mysql),
            "mariadb" => Ok(Dialect::Mariadb),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            "mssql" => Ok(Dialect::Mssql),
            other => Err(Error::UnknownDialect(other.to_owned())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every option the generator understands.
///
/// Unset values fall back to the defaults exposed by the accessor methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoOptions {
    /// Case of file names
    pub case_file: Option<CaseOption>,
    /// Case of model names
    pub case_model: Option<CaseOption>,
    /// Case of property names
    pub case_prop: Option<CaseOption>,
    /// Close connection after export (default true)
    pub close_connection_automatically: Option<bool>,
    pub dialect: Option<Dialect>,
    /// Where to write the model files
    pub directory: PathBuf,
    pub host: Option<String>,
    /// Number of spaces or tabs to indent (default 2)
    pub indentation: Option<usize>,
    pub lang: Option<LangOption>,
    /// Skip writing the files
    pub no_write: Option<bool>,
    pub port: Option<u16>,
    /// Database schema to export
    pub schema: Option<String>,
    /// Singularize model and file names
    pub singular: Option<bool>,
    pub skip_tables: Option<Vec<String>>,
    /// Indent with spaces instead of tabs (default true)
    pub spaces: Option<bool>,
    /// Database file (sqlite only)
    pub storage: Option<PathBuf>,
    /// Tables to export (default all)
    pub tables: Option<Vec<String>>,
    /// Export views (default false)
    pub views: Option<bool>,
    // toml wants tables after plain values
    pub dialect_options: Option<toml::value::Table>,
    pub additional: Option<toml::value::Table>,
}

impl Default for AutoOptions {
    fn default() -> Self {
        Self {
            case_file: None,
            case_model: None,
            case_prop: None,
            close_connection_automatically: None,
            dialect: None,
            directory: PathBuf::from("./models"),
            host: None,
            indentation: None,
            lang: None,
            no_write: None,
            port: None,
            schema: None,
            singular: None,
            skip_tables: None,
            spaces: None,
            storage: None,
            tables: None,
            views: None,
            dialect_options: None,
            additional: None,
        }
    }
}

impl AutoOptions {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "loaded options");
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn indentation(&self) -> usize {
        self.indentation.unwrap_or(2)
    }

    pub fn spaces(&self) -> bool {
        self.spaces.unwrap_or(true)
    }

    pub fn close_connection_automatically(&self) -> bool {
        self.close_connection_automatically.unwrap_or(true)
    }

    pub fn lang(&self) -> LangOption {
        self.lang.unwrap_or_default()
    }

    pub fn no_write(&self) -> bool {
        self.no_write.unwrap_or(false)
    }

    pub fn singular(&self) -> bool {
        self.singular.unwrap_or(false)
    }

    pub fn views(&self) -> bool {
        self.views.unwrap_or(false)
    }

    /// One level of indentation in generated source.
    pub fn indent_unit(&self) -> String {
        let unit = if self.spaces() { " " } else { "\t" };
        unit.repeat(self.indentation())
    }

    /// Whether `table` passes the `tables` and `skip_tables` filters.
    pub fn includes_table(&self, table: &str) -> bool {
        let listed = self
            .tables
            .as_ref()
            .map_or(true, |tables| tables.iter().any(|t| t == table));
        let skipped = self
            .skip_tables
            .as_ref()
            .map_or(false, |skip| skip.iter().any(|t| t == table));
        listed && !skipped
    }

    pub fn model_name(&self, table: &str) -> String {
        recase(self.case_model, Some(table), self.singular())
    }

    pub fn file_name(&self, table: &str) -> String {
        recase(self.case_file, Some(table), self.singular())
    }

    pub fn property_name(&self, column: &str) -> String {
        recase(self.case_prop, Some(column), false)
    }
}
