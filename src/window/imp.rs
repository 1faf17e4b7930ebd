use adw::subclass::prelude::*;
use app_catalog::backend::{install::ClickDelegate, settings::Settings};
use glib::subclass::InitializingObject;
use gtk::{
    glib::{self, clone},
    CompositeTemplate,
};
use std::cell::RefCell;

#[derive(CompositeTemplate, Default)]
#[template(resource = "/org/conman/appcatalog/window.ui")]
pub struct Window {
    #[template_child]
    pub apps: TemplateChild<gtk::FlowBox>,
    pub settings: RefCell<Settings>,
    pub delegate: ClickDelegate,
}

#[glib::object_subclass]
impl ObjectSubclass for Window {
    const NAME: &'static str = "AppCatalogWindow";
    type Type = super::Window;
    type ParentType = adw::ApplicationWindow;

    fn class_init(klass: &mut Self::Class) {
        klass.bind_template();
    }

    fn instance_init(obj: &InitializingObject<Self>) {
        obj.init_template();
    }
}

impl ObjectImpl for Window {
    fn constructed(&self) {
        // Call "constructed" on parent
        self.parent_constructed();

        let obj = self.obj();
        obj.setup_settings();

        glib::source::idle_add_local_once(clone!(
            #[weak(rename_to = window)]
            self,
            move || {
                window.obj().setup_data();
            }
        ));
    }
}

impl WidgetImpl for Window {}

impl WindowImpl for Window {}

impl ApplicationWindowImpl for Window {}

impl AdwApplicationWindowImpl for Window {}
