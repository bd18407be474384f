pub mod bootstrap;
pub mod config;
pub mod event;
pub mod http;
pub mod listing;
pub mod nav;
pub mod page;
pub mod ui;
pub mod util;
