pub mod app;
pub mod backend;
pub mod codec;
pub mod consts;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;
pub mod utils;
