pub mod charts;
pub mod popup;
pub mod status;
pub mod tables;
