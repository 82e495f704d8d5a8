pub mod finalizer;
pub mod generator;
