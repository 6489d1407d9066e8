//! UI Components Module
//!
//! Reusable pieces rendered by the views.

pub mod background;
pub mod criteria_list;
