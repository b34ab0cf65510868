use anyhow::Result;
use clap::Parser;
use clap_markdown::MarkdownOptions;
use dotenv::dotenv;
use log::info;

use drift_vaults_cli::{args::Args, error::fatal_exit_code, handler::CliHandler, log::init_logger};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args: Args = Args::parse();
    init_logger(args.verbose);

    if args.markdown_help {
        let markdown = clap_markdown::help_markdown_custom::<Args>(
            &MarkdownOptions::new().show_table_of_contents(false),
        );
        println!("{}", markdown);
        return Ok(());
    }

    if args.verbose {
        info!("{}", args);
    }

    let handler = CliHandler::from_args(&args)?;
    if let Err(e) = handler.handle(args.command).await {
        // stderr directly, the logger may be filtered off
        if let Some(code) = fatal_exit_code(&e) {
            eprintln!("{}", e);
            std::process::exit(code);
        }
        return Err(e);
    }

    Ok(())
}
