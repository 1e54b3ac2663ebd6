//! Image provider implementations.

pub mod shutterstock;

pub use shutterstock::Shutterstock;
