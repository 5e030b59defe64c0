use clap::{Parser, Subcommand};
use serde_json::Value;

use loancalc::config::AppConfig;
use loancalc::error::CalcError;
use loancalc::core::render_summary;
use loancalc::routes::{self, ROUTES};

#[derive(Parser, Debug)]
#[command(
    name = "loancalc",
    version,
    about = "Mortgage and consumer-loan calculators with an HTTP API"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP API.
    Serve {
        /// Overrides LOANCALC_PORT.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Evaluate one calculator and print the result as JSON.
    Calc {
        /// Calculator slug, e.g. `mortgage` or `15-vs-30`.
        slug: String,
        /// JSON object of inputs; omitted fields use the page defaults.
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        pretty: bool,
        /// Print headline figures formatted for display instead of JSON.
        #[arg(long, conflicts_with = "pretty")]
        display: bool,
    },
    /// Print the site's page table, or the page at one path.
    Routes {
        path: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli.command).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("LOANCALC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Log to stderr so `calc` output stays valid JSON.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn dispatch(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Serve { port } => {
            let config = AppConfig::load()?.with_port(port);
            loancalc::api::run_http_server(config).await?;
        }
        Command::Calc {
            slug,
            input,
            pretty,
            display,
        } => {
            let payload = match input.as_deref() {
                Some(raw) => serde_json::from_str::<Value>(raw)
                    .map_err(|e| CalcError::invalid(format!("--input is not valid JSON: {e}")))?,
                None => Value::Null,
            };
            let result = loancalc::api::evaluate_slug(&slug, payload)?;
            if display {
                for (label, value) in render_summary(&result) {
                    println!("{label:<34} {value}");
                }
                return Ok(());
            }
            let rendered = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{rendered}");
        }
        Command::Routes { path: Some(path) } => {
            let route = routes::lookup(&path).ok_or_else(|| format!("no page at {path}"))?;
            println!("{}", serde_json::to_string_pretty(route)?);
        }
        Command::Routes { path: None } => {
            for route in ROUTES.iter() {
                println!("{:<34} {}", route.path, route.title);
            }
        }
    }
    Ok(())
}
