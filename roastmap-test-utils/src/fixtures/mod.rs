pub mod account;
pub mod push;
