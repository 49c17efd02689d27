pub mod common;
pub mod datapack;
pub mod definition;
pub mod entity;
pub mod error;
pub mod fs;
pub mod namespace;
pub mod project;

pub use datapack::Datapack;
pub use error::DatapackError;
pub use namespace::Namespace;
pub use project::{PackOptions, PackOptionsBuilder};
