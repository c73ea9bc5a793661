pub mod synthetic;
pub mod validate;

pub use synthetic::linear_dataset;
pub use validate::check_dimensions;
