mod imp;

use adw::subclass::prelude::*;
use anyhow::{Context, Result};
use gtk::{
    gio,
    glib::{self, clone, Object},
    prelude::*,
};
use std::{fs, rc::Rc};

use app_catalog::{
    backend::{
        install::{on_install_click, should_hand_off},
        settings::{self, Settings},
        view::{AppListView, ViewConfig},
    },
    constants,
};

use crate::{
    application,
    entry_list::{EntryList, InstallHandler},
    widget_node::{InstallButton, WidgetNode},
};

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gio::ActionGroup, gio::ActionMap, gtk::Accessible, gtk::Buildable,
                    gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl Window {
    pub fn new(app: &application::AppCatalogApplication) -> Self {
        Object::builder().property("application", app).build()
    }

    fn setup_settings(&self) {
        let settings = settings::get().unwrap_or_else(|err| {
            log::warn!("{err:?}; falling back to default settings");
            Settings::default()
        });
        self.imp().settings.replace(settings);
    }

    // One handler serves every entry, including ones appended later.
    fn install_handler(&self) -> InstallHandler {
        Rc::new(clone!(
            #[weak(rename_to = window)]
            self,
            move |button: &gtk::Button| {
                window.handle_install(button);
            }
        ))
    }

    fn setup_data(&self) {
        let view = match self.app_list_view() {
            Ok(view) => view,
            Err(err) => {
                log::error!("app list disabled: {err:?}");
                return;
            }
        };

        glib::spawn_future_local(clone!(
            #[weak(rename_to = window)]
            self,
            async move {
                let list = EntryList::new(
                    &window.imp().apps,
                    view.catalog().http().clone(),
                    window.install_handler(),
                );
                view.initialize(&list).await;
            }
        ));
    }

    fn app_list_view(&self) -> Result<AppListView> {
        let settings = self.imp().settings.borrow();
        let source = template_source(&settings)?;
        let config = ViewConfig::new(settings.endpoint.clone(), &source)
            .context("Failed to parse the entry template")?;
        Ok(AppListView::new(config)?)
    }

    fn handle_install(&self, button: &gtk::Button) {
        let obj = self.imp();

        let container = obj.apps.get().upcast::<gtk::Widget>();
        let Some((button, transition)) = on_install_click(
            &obj.delegate,
            &WidgetNode(container),
            WidgetNode(button.clone().upcast()),
            InstallButton::from_node,
        ) else {
            log::debug!("activated button is not an install control");
            return;
        };

        if should_hand_off(transition, obj.settings.borrow().open_install_uri) {
            if let Some(uri) = button.uri() {
                self.launch_installer(uri);
            }
        }
    }

    fn launch_installer(&self, uri: String) {
        gtk::UriLauncher::new(&uri).launch(Some(self), gio::Cancellable::NONE, move |result| {
            if let Err(err) = result {
                log::warn!("failed to hand {uri} to the installer: {err}");
            }
        });
    }
}

fn template_source(settings: &Settings) -> Result<String> {
    if let Some(path) = &settings.template_path {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read entry template {}", path.display()));
    }
    let bytes =
        gio::resources_lookup_data(constants::TEMPLATE_RESOURCE, gio::ResourceLookupFlags::NONE)
            .context("Entry template missing from resources")?;
    Ok(String::from_utf8(bytes.to_vec())?)
}
