//! Install controls and the click delegate that drives them.
//!
//! Every install control forwards its activation to one shared handler. The
//! handler walks the activated node up to the nearest node carrying the
//! install marker, stopping at the entry container.

/// Marker class carried by every install control.
pub const INSTALL_MARKER: &str = "install";
/// Style class that makes a control look like the primary action.
pub const PRIMARY_STYLE: &str = "suggested-action";
pub const INSTALLED_LABEL: &str = "Installed!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallState {
    Installable,
    Installed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Installed,
    Unchanged,
}

/// A node in the widget tree the delegate walks.
pub trait DelegateNode: Sized + PartialEq {
    fn has_marker(&self, marker: &str) -> bool;
    fn parent_node(&self) -> Option<Self>;
}

/// The mutations an install control has to support.
pub trait InstallControl {
    fn is_interactive(&self) -> bool;
    fn set_interactive(&self, interactive: bool);
    fn remove_style(&self, class: &str);
    fn set_label_text(&self, label: &str);
}

impl InstallState {
    pub fn of(control: &impl InstallControl) -> Self {
        if control.is_interactive() {
            InstallState::Installable
        } else {
            InstallState::Installed
        }
    }
}

/// Moves `control` to `Installed`. A control that is already there is left alone.
pub fn mark_installed(control: &impl InstallControl) -> Transition {
    match InstallState::of(control) {
        InstallState::Installed => Transition::Unchanged,
        InstallState::Installable => {
            control.remove_style(PRIMARY_STYLE);
            control.set_interactive(false);
            control.set_label_text(INSTALLED_LABEL);
            Transition::Installed
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickDelegate {
    marker: String,
}

impl Default for ClickDelegate {
    fn default() -> Self {
        Self::new(INSTALL_MARKER)
    }
}

impl ClickDelegate {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Nearest node from `target` upwards that carries the marker, stopping
    /// at `container`.
    pub fn resolve<N: DelegateNode>(&self, container: &N, target: N) -> Option<N> {
        let mut node = target;
        loop {
            if node == *container {
                return None;
            }
            if node.has_marker(&self.marker) {
                return Some(node);
            }
            node = node.parent_node()?;
        }
    }
}

/// Handles one click inside the container and hands back the control it
/// acted on. `None` means the click did not land on an install control.
pub fn on_install_click<N, C>(
    delegate: &ClickDelegate,
    container: &N,
    target: N,
    as_control: impl FnOnce(N) -> Option<C>,
) -> Option<(C, Transition)>
where
    N: DelegateNode,
    C: InstallControl,
{
    let node = delegate.resolve(container, target)?;
    let control = as_control(node)?;
    let transition = mark_installed(&control);
    Some((control, transition))
}

/// Whether an activation should go on to the external installer.
/// Only a fresh transition hands off; a control already marked installed never does.
pub fn should_hand_off(transition: Transition, open_install_uri: bool) -> bool {
    open_install_uri && transition == Transition::Installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    struct FakeWidget {
        classes: RefCell<Vec<String>>,
        interactive: Cell<bool>,
        label: RefCell<String>,
        parent: Option<Node>,
    }

    #[derive(Clone)]
    struct Node(Rc<FakeWidget>);

    impl PartialEq for Node {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Node {
        fn root() -> Self {
            Self::with_parent(None, &[], "")
        }

        fn child(&self, classes: &[&str], label: &str) -> Self {
            Self::with_parent(Some(self.clone()), classes, label)
        }

        fn with_parent(parent: Option<Node>, classes: &[&str], label: &str) -> Self {
            Node(Rc::new(FakeWidget {
                classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
                interactive: Cell::new(true),
                label: RefCell::new(label.to_owned()),
                parent,
            }))
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.classes.borrow().iter().any(|c| c == class)
        }

        fn label(&self) -> String {
            self.0.label.borrow().clone()
        }
    }

    impl DelegateNode for Node {
        fn has_marker(&self, marker: &str) -> bool {
            self.has_class(marker)
        }

        fn parent_node(&self) -> Option<Self> {
            self.0.parent.clone()
        }
    }

    impl InstallControl for Node {
        fn is_interactive(&self) -> bool {
            self.0.interactive.get()
        }

        fn set_interactive(&self, interactive: bool) {
            self.0.interactive.set(interactive);
        }

        fn remove_style(&self, class: &str) {
            self.0.classes.borrow_mut().retain(|c| c != class);
        }

        fn set_label_text(&self, label: &str) {
            self.0.label.replace(label.to_owned());
        }
    }

    struct Card {
        container: Node,
        install: Node,
        install_label: Node,
        title: Node,
    }

    fn card() -> Card {
        let container = Node::root();
        let entry = container.child(&["card"], "");
        let title = entry.child(&["heading"], "Editor");
        let install = entry.child(&[INSTALL_MARKER, PRIMARY_STYLE, "pill"], "Install");
        let install_label = install.child(&[], "Install");
        Card {
            container,
            install,
            install_label,
            title,
        }
    }

    fn click(card: &Card, target: &Node) -> Option<Transition> {
        on_install_click(
            &ClickDelegate::default(),
            &card.container,
            target.clone(),
            Some,
        )
        .map(|(_, transition)| transition)
    }

    #[test]
    fn click_installs_the_control() {
        let card = card();
        assert_eq!(InstallState::of(&card.install), InstallState::Installable);

        assert_eq!(click(&card, &card.install), Some(Transition::Installed));

        assert_eq!(InstallState::of(&card.install), InstallState::Installed);
        assert!(!card.install.has_class(PRIMARY_STYLE));
        assert!(card.install.has_class(INSTALL_MARKER));
        assert!(card.install.has_class("pill"));
        assert!(!card.install.is_interactive());
        assert_eq!(card.install.label(), "Installed!");
    }

    #[test]
    fn click_on_a_descendant_reaches_the_control() {
        let card = card();
        assert_eq!(click(&card, &card.install_label), Some(Transition::Installed));
        assert_eq!(card.install.label(), INSTALLED_LABEL);
        assert!(card.install_label.is_interactive());
    }

    #[test]
    fn second_click_changes_nothing() {
        let card = card();
        click(&card, &card.install);

        assert_eq!(click(&card, &card.install), Some(Transition::Unchanged));
        assert_eq!(card.install.label(), "Installed!");
        assert!(!card.install.is_interactive());
    }

    #[test]
    fn clicks_elsewhere_are_ignored() {
        let card = card();
        assert_eq!(click(&card, &card.title), None);
        assert_eq!(click(&card, &card.container), None);
        assert!(card.install.is_interactive());
        assert_eq!(card.install.label(), "Install");
    }

    #[test]
    fn resolution_stops_at_the_container() {
        let outer = Node::root().child(&[INSTALL_MARKER], "");
        let container = outer.child(&[], "");
        let inner = container.child(&[], "");

        let delegate = ClickDelegate::default();
        assert!(delegate.resolve(&container, inner).is_none());
    }

    #[test]
    fn entries_added_after_registration_are_covered() {
        let card = card();
        let delegate = ClickDelegate::default();

        let late_entry = card.container.child(&["card"], "");
        let late_install = late_entry.child(&[INSTALL_MARKER, PRIMARY_STYLE], "Install");

        let resolved = delegate.resolve(&card.container, late_install.clone());
        assert!(resolved == Some(late_install.clone()));
        assert_eq!(mark_installed(&late_install), Transition::Installed);
    }

    #[test]
    fn re_enabled_control_can_transition_again() {
        let card = card();
        click(&card, &card.install);
        card.install.set_interactive(true);

        assert_eq!(InstallState::of(&card.install), InstallState::Installable);
        assert_eq!(click(&card, &card.install), Some(Transition::Installed));
    }

    #[test]
    fn controls_that_cannot_be_driven_are_skipped() {
        let card = card();
        let result = on_install_click(
            &ClickDelegate::default(),
            &card.container,
            card.install.clone(),
            |_| None::<Node>,
        );
        assert!(result.is_none());
        assert!(card.install.is_interactive());
    }

    #[test]
    fn activation_hands_off_once_when_enabled() {
        let card = card();

        let first = click(&card, &card.install).unwrap();
        assert!(should_hand_off(first, true));

        let second = click(&card, &card.install).unwrap();
        assert!(!should_hand_off(second, true));
    }

    #[test]
    fn activation_without_hand_off_still_installs() {
        let card = card();

        let transition = click(&card, &card.install).unwrap();
        assert!(!should_hand_off(transition, false));
        assert_eq!(InstallState::of(&card.install), InstallState::Installed);
        assert_eq!(card.install.label(), INSTALLED_LABEL);
        assert!(!card.install.has_class(PRIMARY_STYLE));
    }
}
