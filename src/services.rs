pub mod billing_service;
pub use billing_service::BillingService;
pub mod meter_service;
pub use meter_service::MeterService;
pub mod room_service;
pub use room_service::RoomService;
pub mod tenant_service;
pub use tenant_service::TenantService;
