//! Selection model: image, languages, model and length choices.
//!
//! - `state.rs` - current choices and the language cap
//! - `intent.rs` - user edits
//! - `reducer.rs` - constraint enforcement

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::{SelectionState, MAX_LANGUAGES};
