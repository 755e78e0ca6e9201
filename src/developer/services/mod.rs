//! Application services for the developer directory.

mod directory;

pub use directory::{
    DeveloperDirectoryError, DeveloperDirectoryResult, DeveloperDirectoryService,
    RegisterDeveloperRequest,
};
