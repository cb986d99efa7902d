//! # Orderdesk Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line arguments
//! 2. Initialize tracing (logging)
//! 3. Load settings (file, environment, defaults)
//! 4. Push settings into the shared configuration
//! 5. Assemble the demo orders and print the report
//!
//! The actual setup is in lib.rs for better testability.

fn main() {
    if let Err(err) = orderdesk_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
