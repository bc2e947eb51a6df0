use clap::Parser;
use env_logger::Env;
use javalyzer::errors::ErrorHandler;
use javalyzer::structs::cli::Cli;
use javalyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();

    let mut runner = CommandRunner::new(cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        std::process::exit(ErrorHandler::handle_error(&e));
    }

    Ok(())
}
