//! # storeline Main Entry Point

use anyhow::Result;
use storeline::cmd_args::CommandLineArgs;
use storeline::config::StoreConfig;
use storeline::controllers::write_catalog;
use storeline::io::{TerminalEventStream, TerminalRenderStream};
use storeline::logging::init_tracing_subscriber;
use storeline::services::ShopApi;
use storeline::AppController;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.log_file())?;

    let config = StoreConfig::from_args(&args)?;
    tracing::debug!(
        "Starting storeline against {} (cdn {})",
        config.api_url(),
        config.cdn_url()
    );

    if !atty::is(atty::Stream::Stdout) {
        let api = ShopApi::new(config.api_url(), config.cdn_url())?;
        let mut stdout = std::io::stdout().lock();
        write_catalog(&api, &mut stdout).await?;
        return Ok(());
    }

    let mut app = AppController::with_io_streams(
        &config,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await
}
