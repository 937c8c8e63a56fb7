//! # State Module
//!
//! Station state: the configuration and the controller that owns the
//! verification session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────────────┐    │
//! │  │   StationConfig      │─────────►│   Station                    │    │
//! │  │                      │  builds  │                              │    │
//! │  │  package bounds      │          │  SessionState (by value)     │    │
//! │  │  scanner range/step  │          │  clock                       │    │
//! │  │  report dir/prefix   │          │  export_last_report()        │    │
//! │  │  extra products      │          │                              │    │
//! │  └──────────────────────┘          └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod station;

pub use config::{
    CatalogConfig, ExtraProduct, PackageConfig, ReportConfig, ScannerConfig, StationConfig,
    CONFIG_FILE_NAME,
};
pub use station::{Clock, Station};
