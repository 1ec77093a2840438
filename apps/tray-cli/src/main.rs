//! # Lunch Tray Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() {
    if let Err(err) = tray_cli::run() {
        eprintln!("lunch-tray: {}", err);
        std::process::exit(1);
    }
}
