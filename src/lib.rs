// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Rotation, focus and layout engine for interactive 3D model carousels.
//!
//! A ring of models is spun by pointer drags, snapped to slots with eased
//! animations, and watched for the model that faces the viewer. The crate
//! renders nothing: a host feeds it pointer events and frame timestamps and
//! reads back the group yaw, per-model transforms and focus changes.
//!
//! # Key entry points
//!
//! - [`carousel::Carousel`] - one mounted carousel (input, tick, navigation)
//! - [`catalog::ModelCatalog`] - models and their identity-keyed profiles
//! - [`options::Options`] - tunables with TOML presets
//! - [`input::PointerProcessor`] - pointer capture and drag actions
//!
//! # Time
//!
//! The engine never reads the wall clock. Every pointer event carries a host
//! timestamp and every frame is a [`util::frame::Frame`], so sessions
//! replay deterministically with synthetic time.

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use carousel::Carousel;
pub use error::CarouselError;
