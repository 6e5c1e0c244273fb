#[allow(clippy::module_inception)]
pub mod component;
pub mod element;
pub mod form;
pub mod navbar;
