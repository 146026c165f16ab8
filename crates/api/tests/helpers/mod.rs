pub mod assertions;
pub mod client;
pub mod mocks;
pub mod setup;

pub use assertions::*;
pub use client::*;
pub use mocks::*;
pub use setup::*;
