// Scanning buckets and reporting on what was found
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// The per-bucket aggregate and the final `Analysis`.
mod analysis;

/// Fans out one scan per bucket and collects the results.
mod collector;

/// Lists and filters buckets.
mod lister;

/// Renders an `Analysis` for output.
mod render;

/// Finds the right regional client for a bucket.
mod resolver;

/// Drives paginated object listings.
mod scanner;

pub use analysis::*;
pub use collector::*;
pub use lister::*;
pub use render::*;
