pub mod colors;
pub mod hook;
pub mod links;
pub mod log;
