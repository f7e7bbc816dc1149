//! Application services for the federation directory.

mod directory;
pub mod index;

pub use directory::{
    DirectoryService, DirectoryServiceError, DirectoryServiceResult, ToggleOutcome,
};
