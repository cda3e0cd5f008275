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

//! Drag-to-spin 3D image carousel.
//!
//! A ring of N flat panels rotates around one vertical axis. Dragging a
//! pointer horizontally spins the ring; on release the ring keeps spinning
//! and decays geometrically under friction until it comes to rest. Every
//! update recomputes which panels face the viewer.
//!
//! # Key entry points
//!
//! - [`controller::RotationController`] - the drag / momentum state machine
//! - [`carousel::Carousel`] - a controller plus its pointer subscription,
//!   with symmetric `attach` / `detach`
//! - [`options::CarouselOptions`] - ring geometry and motion tuning
//! - [`ring::Ring`] - panel offsets, radius and per-panel visibility
//!
//! # Architecture
//!
//! The controller never talks to a platform directly. It pulls frames
//! through a [`frame::FrameScheduler`], pushes its output into a
//! [`view::RingView`], and receives input from whoever owns a
//! [`input::PointerSource`] subscription. Native hosts and tests use
//! [`frame::ManualScheduler`], [`view::RecordingView`] and
//! [`input::PointerBus`]; the `web` feature provides DOM-backed versions
//! driven by `requestAnimationFrame`.

pub mod carousel;
pub mod controller;
pub mod error;
pub mod frame;
pub mod input;
pub mod options;
pub mod ring;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use carousel::Carousel;
pub use controller::{MotionPhase, RotationController};
pub use error::CarouselError;
pub use options::CarouselOptions;
