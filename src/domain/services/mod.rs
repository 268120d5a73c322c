pub mod clipboard;
pub mod clock;
pub mod retrieval;
