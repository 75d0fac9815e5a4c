mod deposit;
mod get_config;
mod get_epoch_spent;
mod get_share_price;
mod get_stats;
pub mod types;
mod withdraw;

pub use deposit::deposit;
pub use get_config::get_config;
pub use get_epoch_spent::get_epoch_spent;
pub use get_share_price::get_share_price;
pub use get_stats::get_stats;
pub use withdraw::withdraw;
