//! QBF/QDIMACS encoder: turns one topologically-ordered window into a
//! prenex-CNF formula whose satisfiability asserts that an ℓ-gate
//! tri-state circuit reproduces the window's behaviour on every legal
//! input assignment.

mod encode;
mod error;
mod qdimacs;
mod state;
mod truth;
mod vars;

pub use encode::encode_window;
pub use error::QbfError;
pub use qdimacs::{write_qdimacs, EncodedFormula, Quantifier};
pub use state::WireState;
