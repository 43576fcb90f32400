mod logging;

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use fixtura_core::{CatalogFile, ClassCatalog, Error as CoreError, validate_catalog_file};
use fixtura_introspect::{
    ClassInfoBuilder, ExclusionSpec, IntrospectError, IntrospectOptions, build_class_info,
};
use logging::{LogTarget, LoggingError, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("catalog error: {0}")]
    Core(#[from] CoreError),
    #[error("introspection error: {0}")]
    Introspect(#[from] IntrospectError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fixtura", version, about = "Inspect class catalogs for test-data generation")]
struct Cli {
    /// Emit logs as JSON records.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the discovered attributes of one class as JSON.
    Inspect(InspectArgs),
    /// Check a catalog file for structural errors.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Catalog JSON file.
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,
    /// Fully qualified class name.
    #[arg(long = "class", value_name = "NAME")]
    class_name: String,
    /// Introspection options (TOML).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Attribute name to leave out; may be repeated.
    #[arg(long, value_name = "NAME")]
    exclude_field: Vec<String>,
    /// Annotation type whose attributes are left out; may be repeated.
    #[arg(long, value_name = "TYPE")]
    exclude_annotation: Vec<String>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Catalog JSON file.
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(LogTarget {
        json: cli.log_json,
        file: cli.log_file.as_deref(),
    })?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Inspect(args) => run_inspect(args, &mut stdout),
        Command::Validate(args) => run_validate(args, &mut stdout),
    }
}

fn load_catalog_file(path: &Path) -> Result<CatalogFile, CliError> {
    let json = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&json)?;
    validate_catalog_file(&file)?;
    Ok(file)
}

fn run_inspect(args: InspectArgs, out: &mut impl Write) -> Result<(), CliError> {
    let InspectArgs {
        catalog,
        class_name,
        config,
        exclude_field,
        exclude_annotation,
    } = args;

    let catalog = ClassCatalog::from(load_catalog_file(&catalog)?);

    let builder = match config {
        Some(path) => IntrospectOptions::load(&path)?.builder()?,
        None => ClassInfoBuilder::new(),
    };
    let exclusions = merge_exclusions(builder.exclusions(), exclude_field, exclude_annotation);
    let builder = builder.with_exclusions(exclusions);

    tracing::info!(event = "inspect_started", class = %class_name, classes = catalog.len());
    let info = builder.build(&catalog, &class_name)?;
    tracing::info!(event = "inspect_finished", class = %class_name, attributes = info.len());

    serde_json::to_writer_pretty(&mut *out, &info)?;
    writeln!(out)?;
    Ok(())
}

fn merge_exclusions(
    base: &ExclusionSpec,
    fields: Vec<String>,
    annotations: Vec<String>,
) -> ExclusionSpec {
    let mut merged = base.clone();
    merged.fields.extend(fields);
    merged.annotations.extend(annotations);
    merged
}

fn run_validate(args: ValidateArgs, out: &mut impl Write) -> Result<(), CliError> {
    let file = load_catalog_file(&args.catalog)?;
    let classes = file.classes.len();
    let catalog = ClassCatalog::from(file);

    // Every concrete class must introspect cleanly under the default strategy.
    let mut inaccessible = BTreeSet::new();
    for class in catalog.iter() {
        match build_class_info(&catalog, &class.name, None, &ExclusionSpec::default()) {
            Ok(_) => {}
            Err(IntrospectError::Inaccessible(name)) => {
                inaccessible.insert(name);
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!(event = "catalog_validated", classes, opaque = inaccessible.len());
    writeln!(out, "catalog ok: {classes} classes ({} opaque)", inaccessible.len())?;
    Ok(())
}
