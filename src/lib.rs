// src/lib.rs

pub mod api;
pub mod calculator;
pub mod config;
pub mod history;
pub mod session;
pub mod state;
