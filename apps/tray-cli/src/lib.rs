//! # Lunch Tray Terminal Screen
//!
//! A line-oriented ordering screen over `tray-core`. Each input line is one
//! command; each command answers with one line of JSON.
//!
//! ## Module Organization
//! ```text
//! tray_cli/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── order.rs    ◄─── Order session (Arc<Mutex<OrderState>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── menu.rs     ◄─── Menu listing
//! │   ├── order.rs    ◄─── Selections, submit, cancel
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example Session
//! ```text
//! > entree burger
//! {"ok":true,"data":{"entree":{...},"subtotal":"$5.00","tax":"$0.40","total":"$5.40",...}}
//! > side fries
//! {"ok":true,"data":{...,"subtotal":"$7.00","tax":"$0.56","total":"$7.56",...}}
//! > cancel
//! {"ok":true,"data":{"entree":null,...,"total":"$0.00","complete":false}}
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tray_core::Catalog;

use commands::Command;
use error::ApiError;
use state::{ConfigError, ConfigState, OrderSession};

/// Everything a command can touch.
#[derive(Debug)]
pub struct AppContext {
    pub config: ConfigState,
    pub catalog: Catalog,
    pub session: OrderSession,
}

impl AppContext {
    /// Builds the context from configuration, loading the menu it names.
    pub fn new(config: ConfigState) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        let session = OrderSession::new(config.tax_rate());
        Ok(AppContext {
            config,
            catalog,
            session,
        })
    }
}

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Reply {
    Ok { ok: bool, data: serde_json::Value },
    Err { ok: bool, error: ApiError },
}

impl From<Result<serde_json::Value, ApiError>> for Reply {
    fn from(result: Result<serde_json::Value, ApiError>) -> Self {
        match result {
            Ok(data) => Reply::Ok { ok: true, data },
            Err(error) => Reply::Err { ok: false, error },
        }
    }
}

/// Runs the screen on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load configuration from `TRAY_*` environment variables
/// 3. Load the menu and open an order session
/// 4. Serve commands until `quit` or end of input
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::from_env()?;
    let ctx = AppContext::new(config)?;

    info!(
        store = %ctx.config.store_name,
        items = ctx.catalog.len(),
        tax_bps = ctx.config.tax_rate_bps,
        "Lunch Tray ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(stdin.lock(), stdout.lock(), &ctx)?;

    info!("Lunch Tray shutting down");
    Ok(())
}

/// Reads commands from `input` and writes one JSON reply per command.
pub fn serve<R, W>(input: R, mut output: W, ctx: &AppContext) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(line = %line, "rejected command");
                write_reply(&mut output, Err(err))?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let result = commands::dispatch(&command, ctx);
        write_reply(&mut output, result)?;
    }

    output.flush()
}

fn write_reply<W: Write>(
    output: &mut W,
    result: Result<serde_json::Value, ApiError>,
) -> io::Result<()> {
    let reply = Reply::from(result);
    serde_json::to_writer(&mut *output, &reply)?;
    writeln!(output)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tray_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for the tray crates
///
/// Logs go to stderr so stdout carries only replies.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tray=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
