use crate::backend::{descriptor::AppDescriptor, template::Template};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 unreserved characters stay as they are.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A descriptor after it went through the entry template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEntry {
    pub name: String,
    pub markup: String,
    pub icon_url: String,
}

impl RenderedEntry {
    /// Fills `name` and `appname` with the app name, `appname_uri` with the
    /// same name percent-encoded for use inside a URI, and `imgurl` with the
    /// icon URL.
    pub fn render(template: &Template, app: &AppDescriptor) -> Self {
        let appname_uri = utf8_percent_encode(&app.name, URI_COMPONENT).to_string();
        let markup = template.render(&[
            ("name", app.name.as_str()),
            ("appname", app.name.as_str()),
            ("appname_uri", appname_uri.as_str()),
            ("imgurl", app.icon_url.as_str()),
        ]);
        Self {
            name: app.name.clone(),
            markup,
            icon_url: app.icon_url.clone(),
        }
    }
}

/// One entry per descriptor, in the order the descriptors came in.
pub fn render_entries(template: &Template, apps: &[AppDescriptor]) -> Vec<RenderedEntry> {
    apps.iter()
        .map(|app| RenderedEntry::render(template, app))
        .collect()
}
