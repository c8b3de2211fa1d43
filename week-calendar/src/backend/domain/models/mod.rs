pub mod calendar_date;
pub mod error;
pub mod week_block;

pub use calendar_date::*;
pub use error::*;
pub use week_block::*;
