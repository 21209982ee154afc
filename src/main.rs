use clap::Parser;
use model_auto::{
    logging::init_logging, qname_split, AutoOptions, CaseOption, Dialect, LangOption, Result,
};
use std::{path::PathBuf, process};
use tracing::{debug, error, info};

/// Resolve model generation options and preview the names they produce
#[derive(Parser, Debug)]
#[command(name = "model-auto", long_about = None)]
struct Cli {
    /// Options file (TOML); flags take precedence over its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the resolved options as TOML
    #[arg(long)]
    print_config: bool,
    /// Where to write the model files
    #[arg(short = 'o', long)]
    directory: Option<PathBuf>,
    /// Database dialect (mysql, mariadb, postgres, sqlite, mssql)
    #[arg(short = 'e', long)]
    dialect: Option<Dialect>,
    #[arg(long)]
    host: Option<String>,
    #[arg(short, long)]
    port: Option<u16>,
    /// Database schema to export
    #[arg(short, long)]
    schema: Option<String>,
    /// Database file (sqlite only)
    #[arg(long)]
    storage: Option<PathBuf>,
    /// Comma-separated tables to export
    #[arg(short = 't', long, value_delimiter = ',')]
    tables: Option<Vec<String>>,
    /// Comma-separated tables to skip
    #[arg(short = 'T', long, value_delimiter = ',')]
    skip_tables: Option<Vec<String>>,
    /// Case of model names (c, l, o, p, u)
    #[arg(long)]
    case_model: Option<CaseOption>,
    /// Case of file names (c, l, o, p, u)
    #[arg(long)]
    case_file: Option<CaseOption>,
    /// Case of property names (c, l, o, p, u)
    #[arg(long)]
    case_prop: Option<CaseOption>,
    /// Model language (es5, es6, esm, ts)
    #[arg(short, long)]
    lang: Option<LangOption>,
    /// Singularize model and file names
    #[arg(long)]
    singularize: bool,
    /// Number of spaces or tabs to indent
    #[arg(short, long)]
    indentation: Option<usize>,
    /// Indent with tabs instead of spaces
    #[arg(long)]
    use_tabs: bool,
    /// Export views
    #[arg(short, long)]
    views: bool,
    /// Skip writing the files
    #[arg(long)]
    no_write: bool,
    /// Keep the connection open after export
    #[arg(long)]
    keep_connection: bool,
    /// Table names to preview, optionally schema-qualified (defaults to --tables)
    names: Vec<String>,
}

impl Cli {
    fn apply(&self, options: &mut AutoOptions) {
        if let Some(directory) = &self.directory {
            options.directory = directory.clone();
        }
        if self.dialect.is_some() {
            options.dialect = self.dialect;
        }
        if self.host.is_some() {
            options.host = self.host.clone();
        }
        if self.port.is_some() {
            options.port = self.port;
        }
        if self.schema.is_some() {
            options.schema = self.schema.clone();
        }
        if self.storage.is_some() {
            options.storage = self.storage.clone();
        }
        if self.tables.is_some() {
            options.tables = self.tables.clone();
        }
        if self.skip_tables.is_some() {
            options.skip_tables = self.skip_tables.clone();
        }
        if self.case_model.is_some() {
            options.case_model = self.case_model;
        }
        if self.case_file.is_some() {
            options.case_file = self.case_file;
        }
        if self.case_prop.is_some() {
            options.case_prop = self.case_prop;
        }
        if self.lang.is_some() {
            options.lang = self.lang;
        }
        if self.indentation.is_some() {
            options.indentation = self.indentation;
        }
        if self.singularize {
            options.singular = Some(true);
        }
        if self.use_tabs {
            options.spaces = Some(false);
        }
        if self.views {
            options.views = Some(true);
        }
        if self.no_write {
            options.no_write = Some(true);
        }
        if self.keep_connection {
            options.close_connection_automatically = Some(false);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut options = match &cli.config {
        Some(path) => AutoOptions::load(path)?,
        None => AutoOptions::default(),
    };
    cli.apply(&mut options);

    info!(
        directory = %options.directory.display(),
        dialect = ?options.dialect,
        lang = ?options.lang(),
        "resolved options"
    );

    if cli.print_config {
        print!("{}", options.to_toml_string()?);
    }

    let names = if cli.names.is_empty() {
        options.tables.clone().unwrap_or_default()
    } else {
        cli.names.clone()
    };

    for qname in &names {
        let (schema, table) = qname_split(qname);
        if !options.includes_table(table) {
            debug!(table, "skipping table");
            continue;
        }
        let schema = schema.or(options.schema.as_deref()).unwrap_or("-");
        println!(
            "{}\t{}\t{}\t{}",
            schema,
            table,
            options.model_name(table),
            options.file_name(table)
        );
    }

    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{}", err);
        process::exit(1);
    }
}
