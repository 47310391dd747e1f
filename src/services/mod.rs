mod loader;

pub use loader::{ClassLoader, LoadOutcome, LoadedSet, PreloadReport};
