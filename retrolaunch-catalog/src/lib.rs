pub mod configs;
pub mod cores;
pub mod paths;

mod entry;

pub use entry::*;
