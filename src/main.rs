use anyhow::Result;
use codemend::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
