pub mod balance;
pub mod error;
pub mod parser;
pub mod presenter;
pub mod transaction;
