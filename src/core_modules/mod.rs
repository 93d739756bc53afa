pub mod blob;
pub mod intensity_field;
pub mod multiplier;
pub mod utils;
