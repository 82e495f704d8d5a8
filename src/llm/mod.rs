pub mod client;
pub mod hosted;
pub mod local;
pub mod prompt;
