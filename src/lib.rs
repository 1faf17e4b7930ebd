pub mod backend;
pub mod constants;
