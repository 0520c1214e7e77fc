pub mod diagnostics;
pub mod health;
pub mod note_delete;

pub use diagnostics::*;
pub use health::*;
pub use note_delete::*;
