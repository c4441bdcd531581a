//! API View Model CLI
//!
//! Command-line interface for computing form view models from AMF documents.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use api_view_model::{
    build_property, load_document, load_document_auto, select_node, select_pointer, AmfGraph,
    ApiViewModel, PropertyRecord, ViewModelOptions, DEFAULT_MAX_DEPTH,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(name = "api-view-model")]
#[command(about = "Compute form view models from AMF JSON-LD documents")]
#[command(version)]
struct Cli {
    /// Log transformer decisions to stderr (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the view model of a shape in an AMF document
    Compute {
        /// Document source: file path or URL (http:// or https://)
        document: String,

        /// JSON pointer to the shape (e.g., /0/declares/3); whole document if omitted
        #[arg(long, conflicts_with = "id")]
        pointer: Option<String>,

        /// @id of the shape to compute
        #[arg(long)]
        id: Option<String>,

        /// Leave descriptions out of the model
        #[arg(long)]
        no_docs: bool,

        /// Maximum nesting of object properties
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Complete a partially specified property record
    Build {
        /// JSON file with the partial record
        record: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compute {
            document,
            pointer,
            id,
            no_docs,
            max_depth,
            output,
            pretty,
        } => run_compute(ComputeArgs {
            document,
            pointer,
            id,
            options: ViewModelOptions::new().no_docs(no_docs).max_depth(max_depth),
            output,
            pretty,
        }),
        Commands::Build { record, pretty } => run_build(&record, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

struct ComputeArgs {
    document: String,
    pointer: Option<String>,
    id: Option<String>,
    options: ViewModelOptions,
    output: Option<PathBuf>,
    pretty: bool,
}

fn run_compute(args: ComputeArgs) -> Result<(), u8> {
    let document = load_document_auto(&args.document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    let graph = AmfGraph::from_value(document);

    let shape = match (&args.pointer, &args.id) {
        (Some(pointer), _) => select_pointer(graph.document(), pointer).cloned(),
        (None, Some(id)) => select_node(&graph, id).cloned(),
        (None, None) => Ok(graph.document().clone()),
    }
    .map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let model = ApiViewModel::with_options(graph, args.options);
    let view_model = model.compute_view_model(Some(&shape)).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    tracing::debug!(
        records = view_model.as_ref().map_or(0, Vec::len),
        cached = model.cached_records(),
        "computed view model"
    );

    write_json(&view_model, args.pretty, args.output.as_deref())
}

fn run_build(path: &Path, pretty: bool) -> Result<(), u8> {
    let value = load_document(path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    let defaults: PropertyRecord = serde_json::from_value(value).map_err(|e| {
        eprintln!("Error: invalid property record: {}", e);
        2u8
    })?;

    write_json(&build_property(defaults), pretty, None)
}

fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<(), u8> {
    let json_output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}
