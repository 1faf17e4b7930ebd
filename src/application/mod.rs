use adw::prelude::*;
use gtk::{gio, glib};

use app_catalog::constants;

use crate::window::Window;
mod imp;

glib::wrapper! {
    pub struct AppCatalogApplication(ObjectSubclass<imp::AppCatalogApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl AppCatalogApplication {
    pub fn new(application_id: &str) -> Self {
        glib::Object::builder()
            .property("application-id", application_id)
            .build()
    }

    fn setup_gactions(&self) {
        let quit = gio::ActionEntry::builder("quit")
            .activate(|app: &Self, _, _| app.quit())
            .build();
        let about = gio::ActionEntry::builder("about")
            .activate(|app: &Self, _, _| app.show_about())
            .build();
        self.add_action_entries([quit, about]);
        self.set_accels_for_action("app.quit", &["<primary>q"]);
    }

    /// The catalog window, created on first activation and reused afterwards.
    fn catalog_window(&self) -> gtk::Window {
        self.active_window().unwrap_or_else(|| Window::new(self).upcast())
    }

    fn show_about(&self) {
        let dialog = adw::AboutDialog::builder()
            .application_icon(constants::APP_ID)
            .application_name("App Catalog")
            .version(constants::VERSION)
            .comments("Browse the conman app catalog and hand apps to the installer")
            .build();

        dialog.present(self.active_window().as_ref());
    }
}
