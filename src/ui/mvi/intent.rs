/// Marker trait for intents.
///
/// Intents are either user actions (toggle a language, submit) or results
/// delivered by the background worker (upload finished, generation failed).
pub trait Intent: Send + 'static {}
