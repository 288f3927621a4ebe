pub mod auth;
pub mod detail;
pub mod dispatch;
pub mod feed;
pub mod monitor;
pub mod risk;
pub mod shared;
pub mod stats;
pub mod watch;
