pub mod anchor;
pub mod distance;
