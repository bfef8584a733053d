pub mod account;
pub mod catalog;
pub mod swap;
pub mod vault;
