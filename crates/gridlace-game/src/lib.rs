//! Game sessions: the player-mutable board paired with its pristine
//! puzzle, a turn counter, and the 87-byte session wire format.

pub mod factory;
pub mod session;

pub use session::{Session, SessionDecodeError};
