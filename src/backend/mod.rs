pub mod api;
pub mod catalog;
pub mod descriptor;
pub mod entry;
pub mod install;
pub mod settings;
pub mod template;
pub mod view;

#[cfg(test)]
pub(crate) mod test_server;
