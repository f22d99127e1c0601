mod collision_pipeline;

pub use collision_pipeline::*;
