pub mod norm;

pub use norm::norm_op;
