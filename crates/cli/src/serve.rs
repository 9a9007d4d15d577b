use std::path::PathBuf;
use tracing::info;

pub fn run(root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let service = heroscope_runtime::build_default_engine(root);
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(heroscope_mcp::run_stdio_server(service))?;
    info!("MCP server stopped");
    Ok(())
}
