pub mod matrix;
pub mod init;

pub use matrix::Matrix;
pub use init::standard_normal;
