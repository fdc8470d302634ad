pub mod button;
pub mod header;

pub use button::*;
pub use header::*;
