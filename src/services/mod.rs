pub mod delivery_api;

pub use delivery_api::DeliveryApi;
