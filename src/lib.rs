/// Crypto Monitor TUI - Library
///
/// Presentation layer for the multi-agent crypto monitor backend. The
/// binary polls `GET /api/state` for a whole-dashboard snapshot and renders
/// it in the terminal.
///
/// The library splits into:
/// - Snapshot payload model with defensive decoding
/// - Formatting policy engine (tiered currency precision, cached patterns)
/// - Pure panel renderers producing view trees
/// - Status controller and refresh scheduler
/// - Composition step mapping view trees onto ratatui widgets
pub mod app;
pub mod fetch;
pub mod format;
pub mod locale;
pub mod render;
pub mod scheduler;
pub mod snapshot;
pub mod status;
pub mod ui;
pub mod view;

// Re-export the types the binary and tests reach for most.
pub use app::{Dashboard, PanelViews};
pub use fetch::{FetchError, HttpSnapshotSource, SnapshotSource, DEFAULT_ENDPOINT};
pub use format::{Formatters, NO_TIMESTAMP, PLACEHOLDER};
pub use scheduler::{Command, RefreshOutcome, RefreshScheduler, SchedulerHandle, REFRESH_INTERVAL};
pub use snapshot::StateSnapshot;
pub use status::{Connectivity, StatusView};
