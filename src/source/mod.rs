mod chapter;
pub use chapter::*;

mod providers;
pub use providers::*;
