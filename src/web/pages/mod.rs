//! Server-rendered pages (maud).

pub mod blog;
pub mod forms;
pub mod home;
pub mod info;
pub mod layout;
pub mod products;
pub mod reset_password;
