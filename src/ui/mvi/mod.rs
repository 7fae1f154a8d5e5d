//! Model-View-Intent primitives for the generator screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Each workflow concern (selection, upload, generation) owns a state type,
//! an intent enum and a reducer. The reducer is the only place its state
//! changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
