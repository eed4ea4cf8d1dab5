mod about;
mod contact;
mod home;
mod menu;
mod not_found;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use menu::Menu;
pub use not_found::NotFound;
