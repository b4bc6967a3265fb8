pub mod collection;
pub mod dashboard;
pub mod form;
pub mod help;
pub mod login;
pub mod profile;
