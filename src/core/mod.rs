pub mod app;
pub mod config;
pub mod feed;
pub mod paths;
pub mod pick;
pub mod quotes;
pub mod speech;
