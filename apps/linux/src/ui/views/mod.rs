//! UI Views Module
//!
//! Views represent complete screens of the app.

pub mod create_user;
pub mod user_created;

pub use create_user::{CreateUserMessage, CreateUserView};
pub use user_created::UserCreatedMessage;
