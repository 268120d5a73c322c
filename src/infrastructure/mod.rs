pub mod clipboard;
pub mod clock;
pub mod di;
pub mod html;
pub mod http;
pub mod netscape;
