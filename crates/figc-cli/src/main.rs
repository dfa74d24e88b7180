use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use figc_fetch::{file_key_from_url, Config, DocumentSource};
use figc_ir::IrNode;

#[derive(Parser)]
#[command(name = "figc")]
#[command(about = "figc — Figma design-to-HTML/CSS converter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Figma file to HTML + CSS
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for index.html and styles.css
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },

    /// Fetch and convert without writing output
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Figma file key (falls back to FIGMA_FILE_KEY)
    #[arg(long)]
    file_key: Option<String>,

    /// Figma file or design URL; the key is extracted from it
    #[arg(long, conflicts_with = "file_key")]
    file_url: Option<String>,

    /// Load a pre-fetched file JSON instead of contacting the API
    #[arg(long)]
    local_json: Option<PathBuf>,

    /// Figma API token (falls back to FIGMA_TOKEN or FIGMA_API_KEY)
    #[arg(long)]
    token: Option<String>,

    /// Directory for cached file JSON (falls back to FIGMA_CACHE_DIR)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Skip the cache and always fetch from the API
    #[arg(long)]
    no_cache: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build { source, out_dir } => cmd_build(source, &out_dir),
        Command::Check { source } => cmd_check(source),
    }
}

/// Resolve CLI flags and environment into a retrieval config.
/// Flags win over environment variables.
fn resolve_config(args: SourceArgs) -> Result<Config, String> {
    let token = args
        .token
        .or_else(|| std::env::var("FIGMA_TOKEN").ok())
        .or_else(|| std::env::var("FIGMA_API_KEY").ok())
        .unwrap_or_default();

    let file_key = if let Some(key) = args.file_key {
        key
    } else if let Some(url) = args.file_url {
        file_key_from_url(&url).map_err(|e| e.to_string())?
    } else if let Some(env_key) = std::env::var("FIGMA_FILE_KEY").ok().filter(|k| !k.is_empty()) {
        if env_key.starts_with("http") {
            file_key_from_url(&env_key).map_err(|e| e.to_string())?
        } else {
            env_key
        }
    } else if args.local_json.is_some() {
        // A local document needs no key; keep the cache path stable anyway.
        "local".to_string()
    } else {
        return Err(
            "a Figma file is required: pass --file-key, --file-url, or --local-json, \
             or set FIGMA_FILE_KEY"
                .to_string(),
        );
    };

    let mut config = Config::new(file_key, token);
    config.use_cache = !args.no_cache;
    config.local_json = args.local_json;
    if let Some(dir) = args.cache_dir.or_else(|| std::env::var("FIGMA_CACHE_DIR").ok().map(PathBuf::from)) {
        config.cache_dir = dir;
    }
    Ok(config)
}

fn convert(args: SourceArgs) -> Result<IrNode, String> {
    let config = resolve_config(args)?;
    let source = DocumentSource::new(config);

    let file = source.fetch().map_err(|e| format!("Fetch error: {e}"))?;
    figc_ir::document_to_ir(&file)
        .ok_or_else(|| "the document has no pages or frames to convert".to_string())
}

fn cmd_build(source: SourceArgs, out_dir: &Path) -> ExitCode {
    let ir = match convert(source) {
        Ok(ir) => ir,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match figc_codegen::compile(&ir) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        eprintln!("Error creating {}: {e}", out_dir.display());
        return ExitCode::FAILURE;
    }

    let html_path = out_dir.join("index.html");
    let css_path = out_dir.join("styles.css");
    for (path, contents) in [(&html_path, &output.html), (&css_path, &output.css)] {
        if let Err(e) = std::fs::write(path, contents) {
            eprintln!("Error writing {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    eprintln!("Built: {} and {}", html_path.display(), css_path.display());
    ExitCode::SUCCESS
}

fn cmd_check(source: SourceArgs) -> ExitCode {
    let ir = match convert(source) {
        Ok(ir) => ir,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = figc_codegen::compile(&ir) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    eprintln!("OK: {} nodes", count_nodes(&ir));
    ExitCode::SUCCESS
}

fn count_nodes(n: &IrNode) -> usize {
    1 + n.children.iter().map(count_nodes).sum::<usize>()
}
