pub mod booking_draft_service;
pub mod booking_form;
pub mod date_range_service;
pub mod pricing_service;
