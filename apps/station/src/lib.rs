//! # PackCheck Station Library
//!
//! The station layer around `packcheck-core`: configuration, the controller
//! that owns the verification session, the command functions a rendering
//! surface calls, report export and the scenario runner behind the
//! `packcheck` binary.
//!
//! ## Module Organization
//! ```text
//! packcheck_station/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── StationConfig (packcheck.toml)
//! │   └── station.rs  ◄─── Station controller
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── order.rs    ◄─── Cart and confirmation
//! │   ├── package.rs  ◄─── Placement
//! │   ├── scan.rs     ◄─── Scanning
//! │   └── report.rs   ◄─── Finalize and export
//! ├── export.rs       ◄─── Report file writing
//! ├── scenario.rs     ◄─── Scripted sessions from TOML
//! └── error.rs        ◄─── StationError and ApiError
//! ```

pub mod commands;
pub mod error;
pub mod export;
pub mod scenario;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode, StationError, StationResult};
pub use state::{Station, StationConfig};

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,packcheck=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=packcheck_station=trace` - Trace the station only
/// - Default: `info,packcheck=debug`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
