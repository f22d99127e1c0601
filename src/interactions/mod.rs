mod responses;

pub use responses::*;
pub use sweep_tests::*;
