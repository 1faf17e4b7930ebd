use anyhow::{Context, Result};
use app_catalog::{
    backend::{api, entry::RenderedEntry, install::INSTALL_MARKER, view::EntryContainer},
    constants::{ENTRY_OBJECT_ID, ICON_OBJECT_ID},
};
use gtk::{gdk, glib, prelude::*};
use reqwest::blocking::Client;
use std::rc::Rc;

/// Called with the install control the user activated.
pub type InstallHandler = Rc<dyn Fn(&gtk::Button)>;

/// The window's `apps` flow box, filled from rendered builder markup.
pub struct EntryList {
    apps: gtk::FlowBox,
    http: Client,
    on_install: InstallHandler,
}

impl EntryList {
    pub fn new(apps: &gtk::FlowBox, http: Client, on_install: InstallHandler) -> Self {
        Self {
            apps: apps.clone(),
            http,
            on_install,
        }
    }

    // Link buttons launch their URI from `activate-link` before any `clicked`
    // handler runs, so they are caught there and the default launch is stopped.
    fn connect_install(&self, button: &gtk::Button) {
        let on_install = self.on_install.clone();
        match button.downcast_ref::<gtk::LinkButton>() {
            Some(link) => {
                link.connect_activate_link(move |link| {
                    on_install(link.upcast_ref());
                    glib::Propagation::Stop
                });
            }
            None => {
                button.connect_clicked(move |button| on_install(button));
            }
        }
    }

    fn load_icon(&self, image: gtk::Image, url: String) {
        if url.is_empty() {
            return;
        }
        let http = self.http.clone();
        glib::spawn_future_local(async move {
            let fetch_url = url.clone();
            let bytes = match api::run_blocking(move || api::get_bytes(&http, &fetch_url))
                .await
                .and_then(|result| result)
            {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::debug!("keeping stock icon: {err}");
                    return;
                }
            };
            match gdk::Texture::from_bytes(&glib::Bytes::from_owned(bytes)) {
                Ok(texture) => image.set_paintable(Some(&texture)),
                Err(err) => log::debug!("icon at {url} is not an image: {err}"),
            }
        });
    }
}

impl EntryContainer for EntryList {
    fn append(&self, entry: &RenderedEntry) -> Result<()> {
        let builder = gtk::Builder::new();
        builder
            .add_from_string(&entry.markup)
            .with_context(|| format!("Entry template did not build for {}", entry.name))?;
        let widget = builder
            .object::<gtk::Widget>(ENTRY_OBJECT_ID)
            .with_context(|| format!("Entry template has no `{ENTRY_OBJECT_ID}` object"))?;

        builder
            .objects()
            .into_iter()
            .filter_map(|object| object.downcast::<gtk::Button>().ok())
            .filter(|button| button.has_css_class(INSTALL_MARKER))
            .for_each(|button| self.connect_install(&button));

        self.apps.append(&widget);

        if let Some(image) = builder.object::<gtk::Image>(ICON_OBJECT_ID) {
            self.load_icon(image, entry.icon_url.clone());
        }
        Ok(())
    }
}
