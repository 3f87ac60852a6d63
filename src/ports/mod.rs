//! Ports - traits for the collaborators this crate drives but does not own
//!
//! - `store`: Durable key-value storage
//! - `engine`: Queue and transport controller of the playback engine
//! - `notifier`: Fire-and-forget user messages

mod store;
mod engine;
mod notifier;

pub use store::DurableStore;
pub use engine::PlaybackEngine;
pub use notifier::{Notifier, Severity};

#[cfg(test)]
pub use store::MockDurableStore;
#[cfg(test)]
pub use engine::MockPlaybackEngine;
#[cfg(test)]
pub use notifier::MockNotifier;
