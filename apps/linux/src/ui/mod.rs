//! UI Module for the Create User app
//!
//! This module contains the theme, reusable widgets and the two screens of
//! the app: the create-user form and the confirmation shown after signup.

pub mod components;
pub mod theme;
pub mod views;

pub use theme::create_app_theme;
