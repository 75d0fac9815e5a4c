pub mod common;
pub mod fund;
pub mod health;
pub mod members;
pub mod proposals;
