use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One installable application as announced by the catalog endpoint.
///
/// Keys the endpoint leaves out, or sends as `null`, come through as empty
/// strings, so a sparse record still renders instead of failing the whole list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "URL", default, deserialize_with = "lenient_string")]
    pub icon_url: String,
}

// Numbers and booleans keep their JSON text, the way a template engine prints them.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
        }
    }
}
