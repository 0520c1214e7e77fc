pub mod notestore;
pub mod util;
