//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter. The
//! crate/module prefix is hidden (`with_target(false)`); the structured
//! fields (`kind`, `cursor`, `size`) carry the context instead.
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Section lifecycle: actor start, pages loaded, fetch failures, shutdown
//! RUST_LOG=info cargo run
//!
//! # Also every fetch, load_more/retry decision and form state
//! RUST_LOG=debug cargo run
//!
//! # Only the section actors
//! RUST_LOG=pharmacy_recipe::section_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a first load looks like:
//!
//! ```text
//! INFO Section actor started kind=active page_size=10
//! INFO Section actor started kind=archived page_size=10
//! INFO Page loaded kind=active size=10 total=12
//! WARN Page fetch failed kind=archived error=Network error: offline
//! ```
//!
//! Client calls are wrapped in spans (`snapshot{kind=active}`), so the
//! compact format shows which section a line belongs to.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
