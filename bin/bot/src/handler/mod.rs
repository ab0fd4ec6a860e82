pub mod bot;
pub mod message;
