use adw::subclass::prelude::*;
use gtk::{glib, prelude::*};

#[derive(Debug, Default)]
pub struct AppCatalogApplication;

#[glib::object_subclass]
impl ObjectSubclass for AppCatalogApplication {
    const NAME: &'static str = "AppCatalogApplication";
    type Type = super::AppCatalogApplication;
    type ParentType = adw::Application;
}

impl ObjectImpl for AppCatalogApplication {
    fn constructed(&self) {
        self.parent_constructed();
        self.obj().setup_gactions();
    }
}

impl ApplicationImpl for AppCatalogApplication {
    fn activate(&self) {
        self.obj().catalog_window().present();
    }
}

impl GtkApplicationImpl for AppCatalogApplication {}
impl AdwApplicationImpl for AppCatalogApplication {}
