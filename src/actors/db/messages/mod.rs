pub mod account;
pub mod merge;
pub mod merge_code;
