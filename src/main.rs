use anyhow::Result;
use hermes::agent::GATEWAY_FAILURE_MESSAGE;
use hermes::assistant::Assistant;
use hermes::cli::output::Output;
use hermes::cli::{Cli, Commands};
use hermes::utils::config::Config;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose {
        "hermes=debug,info"
    } else {
        "hermes=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(err) = run(cli, &output).await {
        output.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

/// Build the assistant and dispatch the selected mode. Startup errors (bad
/// config, unknown provider) bubble up to `main`, which prints them through
/// [`Output::error`].
async fn run(cli: Cli, output: &Output) -> Result<()> {
    let config = Config::from_env()?;
    let provider = config.provider()?;
    let assistant = Arc::new(Assistant::from_config(&config)?);

    match cli.command {
        Some(Commands::Ask { question }) => {
            let question = question.join(" ");
            let answer = ask(&assistant, &question).await;
            output.answer(&answer);
        }
        None => {
            output.banner();
            output.info(&format!(
                "Provider: {} (model: {})",
                provider.name(),
                provider.model_name()
            ));
            if config.tools.serpapi_key.is_some() {
                output.success("Web search enabled");
            } else {
                output.warning("SERPAPI_KEY not set, web search disabled");
            }
            if config.tools.openweather_api_key.is_some() {
                output.success("Weather lookups enabled");
            } else {
                output.warning("OPENWEATHER_API_KEY not set, weather lookups disabled");
            }
            output.info("Type a question, or 'exit' to quit. Ctrl-C cancels a running query.");
            println!();

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                output.prompt();
                let line = match lines.next_line().await? {
                    Some(line) => line,
                    None => break,
                };
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
                    break;
                }
                let answer = ask(&assistant, query).await;
                output.answer(&answer);
            }
            output.info("Goodbye.");
        }
    }

    Ok(())
}

/// Run one query on a background task so Ctrl-C cancels it cooperatively
/// instead of killing the process.
async fn ask(assistant: &Arc<Assistant>, query: &str) -> String {
    let cancel = CancellationToken::new();
    let assistant = Arc::clone(assistant);
    let query = query.to_string();
    let token = cancel.clone();
    let mut handle =
        tokio::spawn(async move { assistant.handle_query_cancellable(&query, &token).await });

    loop {
        tokio::select! {
            res = &mut handle => {
                return res.unwrap_or_else(|_| GATEWAY_FAILURE_MESSAGE.to_string());
            }
            _ = tokio::signal::ctrl_c() => {
                cancel.cancel();
            }
        }
    }
}
