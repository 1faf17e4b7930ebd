use anyhow::Result;

use crate::backend::{
    api::FetchError,
    catalog::CatalogClient,
    descriptor::AppDescriptor,
    entry::{render_entries, RenderedEntry},
    template::{Template, TemplateError},
};

/// Where rendered entries end up.
pub trait EntryContainer {
    fn append(&self, entry: &RenderedEntry) -> Result<()>;
}

/// Everything the view needs, built once before it starts.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub endpoint: String,
    pub template: Template,
}

impl ViewConfig {
    pub fn new(endpoint: impl Into<String>, template_source: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            endpoint: endpoint.into(),
            template: Template::parse(template_source)?,
        })
    }
}

pub struct AppListView {
    template: Template,
    catalog: CatalogClient,
}

impl AppListView {
    pub fn new(config: ViewConfig) -> Result<Self, FetchError> {
        let catalog = CatalogClient::new(config.endpoint)?;
        Ok(Self::with_catalog(config.template, catalog))
    }

    pub fn with_catalog(template: Template, catalog: CatalogClient) -> Self {
        Self { template, catalog }
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Fetches the list once and fills `container`. A failed fetch leaves the
    /// container untouched; the count of appended entries is returned.
    pub async fn initialize<C: EntryContainer>(&self, container: &C) -> usize {
        match self.catalog.fetch_in_background().await {
            Ok(apps) => {
                let count = self.populate(container, &apps);
                log::info!(
                    "appended {count} of {} apps from {}",
                    apps.len(),
                    self.catalog.endpoint()
                );
                count
            }
            Err(err) => {
                log::warn!("app list unavailable: {err}");
                0
            }
        }
    }

    pub fn populate<C: EntryContainer>(&self, container: &C, apps: &[AppDescriptor]) -> usize {
        let mut count = 0;
        for entry in render_entries(&self.template, apps) {
            match container.append(&entry) {
                Ok(()) => count += 1,
                Err(err) => log::warn!("skipping entry {:?}: {err:?}", entry.name),
            }
        }
        count
    }
}
