pub mod principal;
pub mod view;
