pub mod insert;
pub mod validate;
