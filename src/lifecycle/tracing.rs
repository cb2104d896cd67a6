//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! the whole process. Call it once, before the catalog actor starts.
//!
//! ## Configuration
//!
//! - **Log levels** come from the `RUST_LOG` environment variable, `info` when unset
//! - **Format** is picked by [`LogFormat`]: compact lines for development, JSON
//!   lines for log shippers
//! - Module paths are hidden (`with_target(false)`); the structured fields
//!   (`city_id`, `id`, `size`) carry the context instead
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` with the seeded sizes, `Shutdown`
//! - **Mutations**: `Created`, `Replaced`, `Patched`, `Deleted` at `info`,
//!   rejections at `warn`
//! - **Requests**: every mutation the actor receives and every client read at `debug`,
//!   mutations with the full draft or patch document
//! - **HTTP**: one span per handler; 500 answers logged at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # JSON lines
//! cargo run -- --log-format json
//! ```
//!
//! **With `RUST_LOG=info`**, creating a point of interest in Antwerp prints:
//!
//! ```text
//! INFO Created city_id=city_2 id=poi_7 size=7
//! ```
//!
//! **With `RUST_LOG=debug`** the client side of the same request is logged
//! inside the HTTP handler span and the client span, whose fields are appended
//! to the line:
//!
//! ```text
//! DEBUG create_point_of_interest:create_point_of_interest: Sending request city_id=2 city_id=CityId(2) draft=PointOfInterestDraft { name: "MAS", description: Some("A museum") }
//! DEBUG Create city_id=city_2 draft=PointOfInterestDraft { name: "MAS", description: Some("A museum") }
//! INFO Created city_id=city_2 id=poi_7 size=7
//! ```
//!
//! The actor runs in its own task, so its lines carry no request span.

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
