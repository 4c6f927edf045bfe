pub mod header;
pub mod teams;
pub mod tickets;
