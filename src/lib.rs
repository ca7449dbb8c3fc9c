//! WeatherBrew - a terminal weather dashboard
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod api;
pub mod chart;
pub mod components;
pub mod config;
pub mod effect;
pub mod mock;
pub mod reducer;
pub mod service;
pub mod state;
