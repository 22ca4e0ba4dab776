pub mod customers;
pub mod sessions;
