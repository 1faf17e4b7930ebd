use app_catalog::backend::install::{DelegateNode, InstallControl};
use gtk::prelude::*;

/// A widget as seen by the click delegate.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetNode(pub gtk::Widget);

impl DelegateNode for WidgetNode {
    fn has_marker(&self, marker: &str) -> bool {
        self.0.has_css_class(marker)
    }

    fn parent_node(&self) -> Option<Self> {
        self.0.parent().map(WidgetNode)
    }
}

pub struct InstallButton(pub gtk::Button);

impl InstallButton {
    pub fn from_node(node: WidgetNode) -> Option<Self> {
        node.0.downcast::<gtk::Button>().ok().map(InstallButton)
    }

    /// URI the control points at when it is a link button.
    pub fn uri(&self) -> Option<String> {
        self.0
            .downcast_ref::<gtk::LinkButton>()
            .map(|link| link.uri().to_string())
            .filter(|uri| !uri.is_empty())
    }
}

impl InstallControl for InstallButton {
    fn is_interactive(&self) -> bool {
        self.0.is_sensitive()
    }

    fn set_interactive(&self, interactive: bool) {
        self.0.set_sensitive(interactive);
    }

    fn remove_style(&self, class: &str) {
        self.0.remove_css_class(class);
    }

    fn set_label_text(&self, label: &str) {
        self.0.set_label(label);
    }
}
