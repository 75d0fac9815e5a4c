mod get_member_shares;
mod get_members;
pub mod types;

pub use get_member_shares::get_member_shares;
pub use get_members::get_members;
