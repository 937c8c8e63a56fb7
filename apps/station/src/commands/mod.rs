//! # Commands Module
//!
//! Every action the rendering surface can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── order.rs    ◄─── Catalog, cart, confirmation, full reset
//! ├── package.rs  ◄─── Item selection and placement
//! ├── scan.rs     ◄─── Scan mode, scanner movement, auto sweep
//! └── report.rs   ◄─── Finalize and export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Rendering surface                                                      │
//! │  ─────────────────                                                      │
//! │  canvas click at (120, 340)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Station                                                                │
//! │  ───────                                                                │
//! │  fn place_selected(                                                     │
//! │      station: &mut Station,  ◄── the one session                        │
//! │      x: f64, y: f64,         ◄── from the event                         │
//! │  ) -> Result<ItemView, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Surface draws ItemView, or shows ApiError.message                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-only commands take `&Station`; everything else takes `&mut Station`.

pub mod order;
pub mod package;
pub mod report;
pub mod scan;
