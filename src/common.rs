// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod error;
mod human_size;
mod object;
mod output_format;
mod region;
mod report_config;
mod storage_backend;

#[cfg(test)]
pub mod mock_backend;

pub use bucket::*;
pub use error::*;
pub use human_size::*;
pub use object::*;
pub use output_format::*;
pub use region::*;
pub use report_config::*;
pub use storage_backend::*;
