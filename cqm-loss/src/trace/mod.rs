pub mod stats;
pub mod step;
pub mod tracer;
