pub mod lighting;
pub mod lines;
pub mod render;
