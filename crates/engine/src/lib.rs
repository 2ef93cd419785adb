//! Engine crate - checked commands and move search on top of the pure core
//!
//! The core answers rule questions with `bool`/`Option` and trusts its callers. This
//! crate is the layer that talks to callers that cannot be trusted (UI bridges,
//! scripted players): [`place::apply_place`] explains every rejection with a
//! [`place::PlaceError`], and [`policy`] finds good moves for hints and autoplay.
//!
//! Turn results are logged through `tracing`; install a subscriber to see them.

pub mod place;
pub mod policy;

pub use perfect_fit_core as core;
pub use perfect_fit_types as types;

pub use place::{apply_place, check_place, PlaceError};
pub use policy::{best_placement, legal_moves, Candidate};
