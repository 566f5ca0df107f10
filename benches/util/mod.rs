pub mod command;
pub mod split;
