//! Generation lifecycle: idle → loading → success | failed.
//!
//! - `state.rs` - lifecycle enum
//! - `intent.rs` - submit, worker results, dismiss
//! - `reducer.rs` - the single transition function

mod intent;
mod reducer;
mod state;

pub use intent::GenerationIntent;
pub use reducer::GenerationReducer;
pub use state::GenerationState;
