use plateful::cli;
use plateful::logger::init_logger;
use plateful::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Terminal commands (migrate, dry runs) complete inside cli::run
    let Some(settings) = cli::run().await? else {
        return Ok(());
    };

    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)?;

    Server::new(settings).run().await
}
