//! Business logic behind the HTTP endpoints

pub mod divide;

pub use divide::DivideService;
