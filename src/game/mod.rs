pub mod collision;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod room;
pub mod trail;
pub mod types;
pub mod world;
