/// Marker trait for reducer-owned state.
///
/// `Default` is the initial state and lets the app `mem::take` the current
/// value while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
