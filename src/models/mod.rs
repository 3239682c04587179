pub mod delivery;

pub use delivery::{DeliveryStatus, StatusFilter, StatusUpdate};
