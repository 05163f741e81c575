pub mod custom;
pub mod dass21;
