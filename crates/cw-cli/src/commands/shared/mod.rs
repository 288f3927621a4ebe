pub mod feed;
pub mod limit;
