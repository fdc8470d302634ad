pub mod button;
pub mod color;
pub mod css;
pub mod error;
pub mod header;
pub mod theme;

pub use button::*;
pub use color::*;
pub use css::*;
pub use error::*;
pub use header::*;
pub use theme::*;
