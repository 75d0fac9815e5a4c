mod get_active_proposals;
mod get_has_voted;
mod get_proposal;
mod get_proposals;
mod get_vote_records;
mod lifecycle;
mod submit_proposal;
pub mod types;
mod vote;

pub use get_active_proposals::get_active_proposals;
pub use get_has_voted::get_has_voted;
pub use get_proposal::get_proposal;
pub use get_proposals::get_proposals;
pub use get_vote_records::get_vote_records;
pub use lifecycle::{cancel_proposal, execute_proposal, expire_proposal, finalize_voting};
pub use submit_proposal::submit_proposal;
pub use vote::vote;
