pub mod bfs;
pub mod result;

// Re-export the public functions
pub use bfs::search;
pub use result::{Connection, PathResult};
