mod query;
mod roots;
mod serve;

use clap::{Parser, Subcommand};
use heroscope_api::{IconError, Style};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "heroscope",
    version,
    about = "Query a bundled Heroicons collection from the shell or over MCP",
    long_about = "Heroscope lists, fuzzy-searches and retrieves icons from a Heroicons asset \
                  directory. Retrieved SVG source is canonicalized into a stable, copy-ready form. \
                  The same queries are exposed to LLM agents as Model Context Protocol tools."
)]
pub struct Cli {
    /// Directory containing the 24/outline, 24/solid, 20/solid and 16/solid collections.
    /// Defaults to $HEROSCOPE_ASSET_ROOT, then the nearest node_modules/heroicons.
    #[arg(long, global = true, value_name = "PATH")]
    pub asset_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Model Context Protocol (MCP) server on stdio
    Mcp,
    /// List available icons
    List {
        /// Only list one style (outline, solid, mini, micro)
        #[arg(long, value_parser = parse_style)]
        style: Option<Style>,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fuzzy-search icons by name or keywords
    Search {
        /// Search text, e.g. "arrow right"
        #[arg(value_name = "QUERY")]
        query: String,
        /// Only search one style (outline, solid, mini, micro)
        #[arg(long, value_parser = parse_style)]
        style: Option<Style>,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical SVG source of an icon
    Get {
        /// Icon name; spaces, underscores and case are normalized
        #[arg(value_name = "NAME")]
        name: String,
        /// Icon style (outline, solid, mini, micro)
        #[arg(long, value_parser = parse_style)]
        style: Style,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved asset root and what each style directory holds
    Roots,
}

impl Commands {
    /// Log file component; each subcommand gets its own daily file.
    pub fn log_component(&self) -> &'static str {
        match self {
            Commands::Mcp => "mcp",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Get { .. } => "get",
            Commands::Roots => "roots",
        }
    }
}

fn parse_style(value: &str) -> Result<Style, String> {
    value.parse().map_err(|e: IconError| e.to_string())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout belongs to the MCP transport, so the server only logs to file
    let to_stderr = !matches!(cli.command, Commands::Mcp);
    let _guard = heroscope_runtime::init_logging(cli.command.log_component(), to_stderr);

    let root = heroscope_runtime::resolve_asset_root(cli.asset_root.as_deref())?;
    tracing::info!(
        "{}: asset root {} ({})",
        cli.command.log_component(),
        root.path.display(),
        root.source
    );

    match cli.command {
        Commands::Mcp => serve::run(root.path),
        Commands::List { style, json } => query::list(root.path, style, json),
        Commands::Search {
            query: text,
            style,
            json,
        } => query::search(root.path, &text, style, json),
        Commands::Get { name, style, json } => query::get(root.path, &name, style, json),
        Commands::Roots => roots::run(root),
    }
}
