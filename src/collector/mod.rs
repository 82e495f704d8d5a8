pub mod client;
pub mod collector;
pub mod news;
pub mod onchain;
pub mod sentiment;
