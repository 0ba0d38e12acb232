pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod search;
pub mod source;
pub mod upstream;
pub mod view;
