pub const APP_ID: &str = "org.conman.AppCatalog";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog endpoint used when the settings don't name one.
pub const DEFAULT_ENDPOINT: &str = "http://104.131.156.213:8080";

pub const TEMPLATE_RESOURCE: &str = "/org/conman/appcatalog/app-template.ui";

/// Builder id of the root widget inside a rendered entry.
pub const ENTRY_OBJECT_ID: &str = "entry";
/// Builder id of the image that receives the downloaded icon.
pub const ICON_OBJECT_ID: &str = "icon";
