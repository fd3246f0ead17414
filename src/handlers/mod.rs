pub mod entity;

pub use entity::{create, list, read, remove, update};
