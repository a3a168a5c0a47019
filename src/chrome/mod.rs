pub mod frame;
pub mod runtime;
