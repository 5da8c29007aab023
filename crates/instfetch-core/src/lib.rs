pub mod config;
pub mod error;
pub mod logging;

pub mod artifact;
pub mod destination;
pub mod downloader;
pub mod fetch;
pub mod http;
pub mod listing;
pub mod url_model;
