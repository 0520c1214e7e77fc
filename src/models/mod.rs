pub mod diagnostics;
pub mod error;
pub mod health;
pub mod note_delete;

pub use diagnostics::*;
pub use error::*;
pub use health::*;
pub use note_delete::*;
