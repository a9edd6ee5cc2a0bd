// Form editor: resume field binding plus the transient editor session.
// Every field edit maps onto exactly one store mutator.

pub mod handlers;
pub mod session;

pub use session::{EditorSession, EditorTab, RowOutcome};
