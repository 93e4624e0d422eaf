//! Ports - interfaces the domain layer needs from the outside world

mod directory;

pub use directory::{Directory, DirectoryResult};
