pub mod territory;
pub mod time;

pub use territory::*;
pub use time::*;
