mod bio;
mod project;

pub use bio::*;
pub use project::*;
