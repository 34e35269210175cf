pub mod check;
mod command_result;
mod helper;
pub mod list;

pub use command_result::*;
