#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pharmacy Recipe
//!
//! > **The rule-based kernel of a pharmacy/medications feature.**
//!
//! A host application owns rendering, networking and navigation. This crate
//! owns the decisions in between: which status badge an order shows, which
//! shipping tier is selected, how a payment method is captioned, how a phone
//! number is masked, and how the active and archived prescription lists load
//! page by page.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure transforms first
//! Everything except the list sections is a pure, synchronous function over
//! plain data ([`model`]). No shared state, no I/O, easy to test.
//!
//! ### Actors where there is a lifecycle
//! The prescription lists are the only part with state that changes over
//! time. Each list is an actor ([`section_actor`]) that exclusively owns its
//! state and processes its mailbox sequentially, so there are no locks.
//! Page fetches run as separate tasks and report back through the mailbox.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each concern has its own error type ([`ShippingError`](shipping::ShippingError),
//! [`FetchError`](sections::FetchError), [`SectionError`](sections::SectionError),
//! [`ConfigError`](config::ConfigError)). Missing data is not an error: it
//! produces a fallback label.
//!
//! ### 2. Collaborators as Traits
//! The backend is a [`PageSource`](clients::PageSource) and navigation a
//! [`Navigator`](navigation::Navigator). Tests plug in
//! [`MockPageSource`](clients::mock::MockPageSource) and
//! [`RecordingNavigator`](navigation::RecordingNavigator).
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Orders, shipping options, payment methods, balances and prescriptions,
//! deserializable from the upstream camelCase JSON.
//!
//! ### 2. The Transforms
//! - [`orders`]: status badge priority and order card summaries.
//! - [`shipping`]: index-driven shipping tier selection.
//! - [`payment`]: payment method captions and the make-payment form.
//! - [`prescriber`]: phone mask and search outcome routing.
//! - [`messages`]: landing-page alerts and the balance notice.
//! - [`format`]: USD and date display strings.
//!
//! ### 3. The Lists ([`sections`], [`section_actor`], [`clients`])
//! The per-list state machine, the actor hosting it and the typed client.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`PrescriptionListSystem`](lifecycle::PrescriptionListSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Smaller pages
//! PHARMACY_PAGE_SIZE=2 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod format;
pub mod lifecycle;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod orders;
pub mod payment;
pub mod prescriber;
pub mod section_actor;
pub mod sections;
pub mod shipping;
