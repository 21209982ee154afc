use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid options file: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("failed to serialize options: {0}")]
    SerializeConfig(#[from] toml::ser::Error),
    #[error("unknown case option {0:?}, expected one of c, l, o, p, u")]
    UnknownCaseOption(String),
    #[error("unknown language {0:?}, expected one of es5, es6, esm, ts")]
    UnknownLang(String),
    #[error("unknown dialect {0:?}")]
    UnknownDialect(String),
}

pub type Result<T> = std::result::Result<T, Error>;
