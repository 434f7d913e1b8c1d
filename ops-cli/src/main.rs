use anyhow::Result;
use clap::Parser;
use error_common::{log_error, CareDeskError, Notification};
use ops_cli::{commands, output, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(&cli)?;
    logger_redacted::init_logging(&config.logging)?;

    if let Err(err) = commands::run(cli, config).await {
        match err.downcast_ref::<CareDeskError>() {
            Some(care_err) => {
                log_error("caredesk", care_err);
                output::print_notification(&Notification::from(care_err));
            }
            None => return Err(err),
        }
        std::process::exit(1);
    }

    Ok(())
}
