//! Abstract document interface.
//!
//! Every component reads and writes the page through [`View`]. The browser
//! build implements it over `web-sys`; tests use
//! [`FakeView`](crate::testing::FakeView).

use crate::role::Role;

/// Opaque handle to a document element, stable for the lifetime of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(pub u32);

pub trait View {
    // Lookup
    fn find(&self, role: Role) -> Option<Node> {
        self.find_all(role).into_iter().next()
    }
    fn find_all(&self, role: Role) -> Vec<Node>;
    fn find_within(&self, parent: Node, role: Role) -> Vec<Node>;
    fn closest(&self, node: Node, role: Role) -> Option<Node>;
    fn by_id(&self, id: &str) -> Option<Node>;
    fn root(&self) -> Node;
    fn head(&self) -> Node;
    fn body(&self) -> Node;
    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Node, node: Node) -> bool;

    // Tree edits
    fn create(&self, tag: &str) -> Node;
    fn append(&self, parent: Node, child: Node);
    fn prepend(&self, parent: Node, child: Node);
    /// Remove `node` from the document and retire its handle. Safe to call
    /// on a node that is already out of the document.
    fn detach(&self, node: Node);
    fn is_attached(&self, node: Node) -> bool;

    // Classes
    fn add_class(&self, node: Node, class: &str);
    fn remove_class(&self, node: Node, class: &str);
    fn has_class(&self, node: Node, class: &str) -> bool;
    fn class_name(&self, node: Node) -> String;
    fn set_class_name(&self, node: Node, value: &str);

    fn toggle_class(&self, node: Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    // Attributes, text, style
    fn attr(&self, node: Node, name: &str) -> Option<String>;
    fn set_attr(&self, node: Node, name: &str, value: &str);
    fn remove_attr(&self, node: Node, name: &str);
    fn set_id(&self, node: Node, id: &str) {
        self.set_attr(node, "id", id);
    }
    fn tag(&self, node: Node) -> String;
    fn text(&self, node: Node) -> String;
    fn set_text(&self, node: Node, text: &str);
    fn html(&self, node: Node) -> String;
    /// Replace the markup inside `node`. Handles to its old descendants are
    /// retired.
    fn set_html(&self, node: Node, html: &str);
    fn style(&self, node: Node, property: &str) -> String;
    fn set_style(&self, node: Node, property: &str, value: &str);

    // Form controls
    fn value(&self, node: Node) -> String;
    fn set_value(&self, node: Node, value: &str);
    fn is_checked(&self, node: Node) -> bool;
    fn set_disabled(&self, node: Node, disabled: bool);
    fn reset_form(&self, form: Node);

    // Focus
    fn focus(&self, node: Node);
    fn blur(&self, node: Node);
    fn active_element(&self) -> Option<Node>;

    // Geometry
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, y: f64);
    fn document_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn offset_top(&self, node: Node) -> f64;
}

/// Keys the interaction layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// What the browser glue should do with the event after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOutcome {
    #[default]
    PassThrough,
    PreventDefault,
}

impl EventOutcome {
    pub fn prevented(self) -> bool {
        self == EventOutcome::PreventDefault
    }
}
