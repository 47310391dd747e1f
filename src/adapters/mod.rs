pub mod scaffold_assets;

mod file_logger;
mod filesystem_source;
mod memory_source;

pub use file_logger::FileLogger;
pub use filesystem_source::FilesystemClassSource;
pub use memory_source::InMemoryClassSource;
