pub mod constants;
pub mod distance;
