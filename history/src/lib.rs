//! Local game-history collaborator. Keeps completed-game records and hands
//! them back to the score and history-editing screens. The board core never
//! calls into this crate; the application submits records through the
//! [`HistoryStore`] seam after a game ends and does not depend on the write
//! completing.

pub use error::*;
pub use format::*;
pub use json::*;
pub use memory::*;
pub use store::*;

mod error;
mod format;
mod json;
mod memory;
mod store;
