mod cover;
pub use cover::*;

mod metadata;
pub use metadata::*;
