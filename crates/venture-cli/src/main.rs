//! Venture analysis dashboard
//!
//! An interactive terminal front end for the venture analysis backend.
//!
//! # Usage
//!
//! ```bash
//! # Point the client at the backend
//! export VENTURE_API_BASE="http://localhost:8000"
//!
//! # Interactive dashboard
//! cargo run -p venture-cli
//!
//! # One-shot analysis
//! cargo run -p venture-cli -- --idea "an app that rents idle 3D printers"
//! ```

mod commands;
mod render;
mod workbench;

use clap::Parser;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use venture_api::{ApiClient, ApiConfig};
use workbench::{Flow, Workbench};

#[derive(Parser, Debug)]
#[command(name = "venture")]
#[command(about = "Terminal dashboard for venture idea analysis", long_about = None)]
struct Args {
    /// Backend base URL (overrides VENTURE_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Overall request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Analyze one idea and exit instead of starting the dashboard
    #[arg(long)]
    idea: Option<String>,
}

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║                   Venture Idea Workbench                     ║
║                                                              ║
║  Commands:                                                   ║
║    /analyze <idea>   - Full five-stage analysis              ║
║    /financials       - Refresh the financial projection      ║
║    /assumptions      - Show or tune financial assumptions    ║
║    /chat [message]   - Discuss the idea with the agent       ║
║    /help             - Show help                             ║
║    /exit             - Exit                                  ║
║                                                              ║
║  Or type an idea directly:                                   ║
║    "a mental health tracking app"                            ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn,venture=info".to_string()))
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env()?;
    if let Some(base) = args.api_base {
        config = config.with_base_url(base);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(secs);
    }

    let client = Arc::new(ApiClient::with_config(config)?);
    let mut workbench = Workbench::new(client);

    info!("Starting venture dashboard against {}", workbench.api_base());

    if let Some(idea) = args.idea {
        // One-shot mode: a single analysis, then exit
        if let Err(e) = workbench.analyze(&idea).await {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    print_banner();
    println!("Backend: {}\n", workbench.api_base());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", workbench.prompt());
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match workbench.process_input(input).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {e}\n");
            }
        }
    }

    Ok(())
}
