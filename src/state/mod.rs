//! Signup domain state

mod field;
mod flow;
mod record;
mod session;
mod slide;
mod validation;

pub use field::*;
pub use flow::*;
pub use record::*;
pub use session::*;
pub use slide::*;
