use clap::{Parser, Subcommand, ValueEnum};

/// Terminal client for the product chat API.
#[derive(Parser, Debug)]
#[command(name = "shopbot", version, about = "Terminal client for the product chat API")]
pub struct Cli {
    /// Base URL of the chat service. Falls back to `SHOPBOT_BASE_URL`, then
    /// http://localhost:8000.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (0 = wait indefinitely). Falls back to
    /// `SHOPBOT_TIMEOUT_SECS`.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Which session flavour to run.
        #[arg(long, value_enum, default_value_t = Variant::Logging)]
        variant: Variant,

        /// Record failed round trips that produced an HTTP status in the API trace.
        #[arg(long, default_value_t = false)]
        log_failed: bool,
    },

    /// Ask a single question and print the reply.
    Ask {
        /// The question to send.
        message: String,
    },

    /// List the product catalog.
    Products,

    /// Print the API documentation.
    Docs,

    /// Print the version.
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Greets on start and timestamps messages; no API trace.
    Greeting,
    /// Starts empty and records every round trip in the API trace.
    Logging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_defaults_to_logging_variant() {
        let cli = Cli::try_parse_from(["shopbot", "chat"]).unwrap();
        match cli.command {
            Commands::Chat {
                variant,
                log_failed,
            } => {
                assert_eq!(variant, Variant::Logging);
                assert!(!log_failed);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shopbot",
            "ask",
            "Tell me about Kiwi",
            "--base-url",
            "http://shop.test",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://shop.test"));
        assert_eq!(cli.timeout_secs, Some(5));
        assert!(matches!(cli.command, Commands::Ask { message } if message == "Tell me about Kiwi"));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["shopbot", "chat", "--variant", "fancy"]).is_err());
    }
}
