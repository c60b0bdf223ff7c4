mod color;
mod data;
mod filter;
mod prelude;
mod session;
mod suggest;
pub mod generate;

pub use self::{color::*, data::*, filter::*, prelude::*, session::*, suggest::*};
