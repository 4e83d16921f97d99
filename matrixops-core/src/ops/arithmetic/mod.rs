// Export foundational arithmetic operations directly
pub mod add;
pub mod mul_scalar;

// Re-export the primary operation functions
pub use add::add_op;
pub use mul_scalar::mul_scalar_op;
