pub mod attribute;
pub mod highlight;

pub use attribute::*;
pub use highlight::*;
