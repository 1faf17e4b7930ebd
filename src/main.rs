mod application;
mod entry_list;
mod widget_node;
mod window;
use app_catalog::constants;
use application::AppCatalogApplication;
use gtk::gio;
use gtk::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Register and include resources
    gio::resources_register_include!("app_catalog.gresource")
        .expect("Failed to register resources.");

    let app = AppCatalogApplication::new(constants::APP_ID);
    std::process::exit(app.run().value());
}
