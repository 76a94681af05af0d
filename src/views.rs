pub mod layout;
pub mod home;
pub mod settings;
pub mod rooms;
pub mod invoice;
