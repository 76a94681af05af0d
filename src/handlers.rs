pub mod home;
pub mod settings;
pub mod rooms;
pub mod tenants;
pub mod meters;
pub mod invoices;
