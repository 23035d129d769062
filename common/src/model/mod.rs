pub mod account;
pub mod certification;
pub mod import;
