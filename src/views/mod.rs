pub mod delivery_filter;
pub mod detail_modal;
pub mod status_form;

pub use delivery_filter::apply_filter;
pub use detail_modal::show_delivery_detail;
pub use status_form::update_delivery_status;
