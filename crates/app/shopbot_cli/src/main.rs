// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands, Variant};
use shopbot_core::client::{ChatApi, HttpChatApi};
use shopbot_core::config::ClientConfig;
use shopbot_core::docs::api_docs;
use shopbot_core::render::render_products;
use shopbot_core::session::{ChatSession, SessionOptions, SubmitOutcome};
use tokio::io::BufReader;

mod cli;
mod logging;
mod repl;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();
    let config = resolve_config(&args)?;

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Docs => {
            print!("{}", api_docs(&config.base_url));
        }
        Commands::Products => {
            let api = HttpChatApi::new(config)?;
            let listing = api.list_products().await?;
            print!("{}", render_products(&listing));
        }
        Commands::Ask { message } => {
            let options = SessionOptions::greeting_variant(&config.base_url);
            let mut session = ChatSession::new(HttpChatApi::new(config)?, options);
            let outcome = session.submit(message).await;
            if outcome == SubmitOutcome::Ignored {
                return Err(Error::Custom("message must not be empty".into()));
            }

            if let Some(reply) = session.transcript().last() {
                println!("{}", reply.content);
            }
            if outcome == SubmitOutcome::Failed {
                return Err(Error::Custom("chat request failed".into()));
            }
        }
        Commands::Chat {
            variant,
            log_failed,
        } => {
            let base_url = config.base_url.clone();
            let options = match variant {
                Variant::Greeting => SessionOptions::greeting_variant(&base_url),
                Variant::Logging => SessionOptions::logging_variant(),
            }
            .with_failed_response_logging(*log_failed);

            log::info!("chatting with {base_url}");
            let mut session = ChatSession::new(HttpChatApi::new(config)?, options);
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            repl::run(&mut session, &base_url, stdin, &mut stdout).await?;

            log::debug!(
                "session ended with {} messages and {} logged calls",
                session.transcript().len(),
                session.logs().len()
            );
        }
    }

    Ok(())
}

/// Command-line flags win over `SHOPBOT_*` environment variables.
fn resolve_config(args: &Cli) -> Result<ClientConfig> {
    let from_env = ClientConfig::from_env();
    let config = match &args.base_url {
        Some(url) => ClientConfig::new(url)?.with_timeout(from_env.timeout),
        None => from_env,
    };

    Ok(match args.timeout_secs {
        Some(0) => config.with_timeout(None),
        Some(secs) => config.with_timeout(Some(Duration::from_secs(secs))),
        None => config,
    })
}
