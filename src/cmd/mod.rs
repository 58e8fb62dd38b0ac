pub mod analyze;
pub mod batch;
