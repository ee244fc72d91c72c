pub mod decimal;
pub mod write_ops;
