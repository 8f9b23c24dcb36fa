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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]

//! Geometry engine that morphs 3D solids into their flat nets and back.
//!
//! A single fold parameter `t` drives every piece of a shape: at `t = 0`
//! the pieces assemble into the closed solid, at `t = 1` they lie flat and
//! edge-adjacent as a planar net. A separate free-look controller orbits
//! the whole assembly without touching its fold state.
//!
//! # Key entry points
//!
//! - [`shape::ShapeInstance`] - the piece set and hinge tree of one solid
//! - [`fold::FoldParameter`] - normalised fold state and slider conventions
//! - [`hinge::HingeTree`] - top-down world pose resolution
//! - [`view::ViewController`] - idle/dragging free-look state machine
//! - [`scene::emit`] - posed, styled pieces ready for an external renderer
//! - [`engine::NetEngine`] - session object tying the above together
//!
//! # Architecture
//!
//! Pieces never store world poses. Each one carries a tagged
//! [`fold::PieceMotion`] that maps `t` to a pose relative to its parent;
//! the [`hinge::HingeTree`] composes those down the parent chain, and the
//! view rotation is multiplied on last, outside the assembly.

pub mod content;
pub mod engine;
pub mod error;
pub mod fold;
pub mod geometry;
pub mod hinge;
pub mod options;
pub mod scene;
pub mod shape;
pub mod view;

pub use engine::{NetCommand, NetEngine};
pub use error::NetError;
