pub mod room;
pub mod tariff;
pub mod tenant;
pub mod meter;
pub mod invoice;
pub mod settings;
