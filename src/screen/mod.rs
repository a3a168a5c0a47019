pub mod error;
pub mod normalize;
pub mod screen_model;
