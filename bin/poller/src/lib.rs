//! Polls the Leetify profiles of watched players and notifies the bot about
//! new matches.

pub mod config;
pub mod handler;
pub mod leetify_api;
