mod auth;
mod home;
mod info;
mod not_found;

pub use auth::{SignIn, SignUp};
pub use home::Home;
pub use info::{About, ContactUs, Services};
pub use not_found::NotFound;
