mod shapes;
mod objects;
mod rotation;

pub use shapes::*;
pub use objects::*;
pub use rotation::*;
