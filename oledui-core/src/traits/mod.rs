//! Collaborator traits
//!
//! These traits define the interface between the rendering core and the
//! outside world: the bus the panel sits on and the time source.

pub mod clock;
pub mod transport;

pub use clock::Clock;
pub use transport::Transport;
