//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod task_board;


pub use traits::TaskSource;
pub use task_board::TaskBoard;
