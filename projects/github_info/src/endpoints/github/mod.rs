pub mod contributions;
pub mod user;
