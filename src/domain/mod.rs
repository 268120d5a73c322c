pub mod error;
pub mod item;
pub mod services;
pub mod share_url;
pub mod tree;
