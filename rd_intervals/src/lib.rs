
mod range;
mod range_set;

pub use range::{CodePointRange, successor, predecessor};
pub use range_set::CodePointSet;
