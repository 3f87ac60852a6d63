//! Mirrors a playback engine's queue into durable storage and into an
//! observable playlist state, and derives player status text from the
//! engine's transport state.

pub mod audio;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod ports;
pub mod storage;
pub mod view;
