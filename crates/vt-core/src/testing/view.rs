use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::role::Role;
use crate::view::{Node, View};

#[derive(Debug, Default, Clone)]
struct FakeNode {
    tag: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    value: String,
    checked: bool,
    disabled: bool,
    offset_top: f64,
    parent: Option<u32>,
    children: Vec<u32>,
}

impl FakeNode {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            ..Self::default()
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs
            .get("class")
            .map(String::as_str)
            .unwrap_or("")
            .split_whitespace()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

const ROOT: u32 = 0;
const HEAD: u32 = 1;
const BODY: u32 = 2;

/// In-memory document with just enough DOM semantics for the components.
///
/// Role matching mirrors the selectors in [`Role::selector`]. Nodes are kept
/// forever; detaching only unlinks them from their parent and is logged.
pub struct FakeView {
    nodes: RefCell<Vec<FakeNode>>,
    active: Cell<Option<Node>>,
    scroll_y: Cell<f64>,
    scroll_log: RefCell<Vec<f64>>,
    detach_log: RefCell<Vec<Node>>,
    document_height: Cell<f64>,
    viewport_height: Cell<f64>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeView {
    pub fn new() -> Self {
        let mut root = FakeNode::new("html");
        root.children = vec![HEAD, BODY];
        let mut head = FakeNode::new("head");
        head.parent = Some(ROOT);
        let mut body = FakeNode::new("body");
        body.parent = Some(ROOT);
        Self {
            nodes: RefCell::new(vec![root, head, body]),
            active: Cell::new(None),
            scroll_y: Cell::new(0.0),
            scroll_log: RefCell::new(Vec::new()),
            detach_log: RefCell::new(Vec::new()),
            document_height: Cell::new(3000.0),
            viewport_height: Cell::new(800.0),
        }
    }

    /// Create `tag` under `parent` with the given attributes.
    pub fn el(&self, tag: &str, parent: Node, attrs: &[(&str, &str)]) -> Node {
        let node = self.create(tag);
        for (name, value) in attrs {
            self.set_attr(node, name, value);
        }
        self.append(parent, node);
        node
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_document_height(&self, h: f64) {
        self.document_height.set(h);
    }

    pub fn set_viewport_height(&self, h: f64) {
        self.viewport_height.set(h);
    }

    pub fn set_offset_top(&self, node: Node, y: f64) {
        self.with_mut(node, |n| n.offset_top = y);
    }

    pub fn set_checked(&self, node: Node, checked: bool) {
        self.with_mut(node, |n| n.checked = checked);
    }

    pub fn is_disabled(&self, node: Node) -> bool {
        self.with(node, |n| n.disabled)
    }

    /// Every position passed to `scroll_to`, oldest first.
    pub fn scroll_log(&self) -> Vec<f64> {
        self.scroll_log.borrow().clone()
    }

    /// Every node passed to `detach`, oldest first.
    pub fn detached(&self) -> Vec<Node> {
        self.detach_log.borrow().clone()
    }

    /// Remove `node` from its parent without going through `View::detach`,
    /// as markup handlers like `this.parentElement.remove()` do.
    pub fn unlink(&self, node: Node) {
        if let Some(parent) = self.parent(node) {
            self.with_mut(parent, |p| p.children.retain(|c| *c != node.0));
            self.with_mut(node, |n| n.parent = None);
        }
    }

    pub fn children(&self, node: Node) -> Vec<Node> {
        self.with(node, |n| n.children.iter().copied().map(Node).collect())
    }

    fn with<R>(&self, node: Node, f: impl FnOnce(&FakeNode) -> R) -> R {
        f(&self.nodes.borrow()[node.0 as usize])
    }

    fn with_mut<R>(&self, node: Node, f: impl FnOnce(&mut FakeNode) -> R) -> R {
        f(&mut self.nodes.borrow_mut()[node.0 as usize])
    }

    fn parent(&self, node: Node) -> Option<Node> {
        self.with(node, |n| n.parent.map(Node))
    }

    fn descendants(&self, node: Node, out: &mut Vec<Node>) {
        for child in self.children(node) {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn has_ancestor_class(&self, node: Node, class: &str) -> bool {
        let mut cur = self.parent(node);
        while let Some(p) = cur {
            if self.with(p, |n| n.has_class(class)) {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }

    fn matches(&self, node: Node, role: Role) -> bool {
        if role == Role::HeroShape {
            return self.with(node, |n| n.has_class("shape"))
                && self.has_ancestor_class(node, "hero-bg-shapes");
        }
        self.with(node, |n| match role {
            Role::Navbar => n.id() == Some("navbar"),
            Role::NavToggle => n.id() == Some("nav-toggle"),
            Role::NavMenu => n.id() == Some("nav-menu"),
            Role::ThemeToggle => n.id() == Some("theme-toggle"),
            Role::LoadingScreen => n.id() == Some("loading-screen"),
            Role::BackToTop => n.id() == Some("back-to-top"),
            Role::ContactForm => n.id() == Some("contact-form"),
            Role::PhoneInput => n.id() == Some("phone"),
            Role::ServiceModal => n.id() == Some("service-modal"),
            Role::ModalTitle => n.id() == Some("modal-title"),
            Role::ModalBody => n.id() == Some("modal-body"),
            Role::NavLink => n.has_class("nav-link"),
            Role::ScrollProgress => n.has_class("scroll-progress"),
            Role::FloatingCard => n.has_class("floating-card"),
            Role::Hero => n.has_class("hero"),
            Role::HeroTitle => n.has_class("hero-title"),
            Role::FilterButton => n.has_class("filter-btn"),
            Role::PortfolioItem => n.has_class("portfolio-item"),
            Role::Testimonial => n.has_class("testimonial-item"),
            Role::TestimonialDot => n.has_class("nav-dot"),
            Role::TestimonialSlider => n.has_class("testimonials-slider"),
            Role::SocialLink => n.has_class("social-link"),
            Role::HashLink => {
                n.is("a") && n.attrs.get("href").is_some_and(|h| h.starts_with('#'))
            }
            Role::Icon => n.is("i"),
            Role::RevealTarget => n.has_attr("data-aos"),
            Role::Section => n.is("section"),
            Role::StatCounter => n.has_class("stat-number") && n.has_attr("data-target"),
            Role::FormControl => n.is("input") || n.is("select") || n.is("textarea"),
            Role::RequiredField => n.has_attr("required"),
            Role::SubmitButton => {
                n.is("button") && n.attrs.get("type").is_some_and(|t| t == "submit")
            }
            Role::Focusable => {
                ["button", "input", "select", "textarea"].iter().any(|t| n.is(t))
                    || n.has_attr("href")
                    || n.attrs.get("tabindex").is_some_and(|t| t != "-1")
            }
            Role::UnlabelledButton => n.is("button") && !n.has_attr("aria-label"),
            Role::LazyImage => {
                n.is("img") && n.attrs.get("loading").is_some_and(|l| l == "lazy")
            }
            Role::TrackedControl => n.is("button") || n.is("a"),
            Role::HeroShape => unreachable!("handled above"),
        })
    }

    fn set_classes(&self, node: Node, classes: Vec<String>) {
        self.with_mut(node, |n| {
            n.attrs.insert("class".to_owned(), classes.join(" "));
        });
    }

    fn class_list(&self, node: Node) -> Vec<String> {
        self.with(node, |n| n.classes().map(str::to_owned).collect())
    }
}

impl View for FakeView {
    fn find_all(&self, role: Role) -> Vec<Node> {
        self.find_within(self.root(), role)
    }

    fn find_within(&self, parent: Node, role: Role) -> Vec<Node> {
        let mut all = Vec::new();
        self.descendants(parent, &mut all);
        all.into_iter().filter(|n| self.matches(*n, role)).collect()
    }

    fn closest(&self, node: Node, role: Role) -> Option<Node> {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if self.matches(n, role) {
                return Some(n);
            }
            cur = self.parent(n);
        }
        None
    }

    fn by_id(&self, id: &str) -> Option<Node> {
        let mut all = Vec::new();
        self.descendants(self.root(), &mut all);
        all.into_iter().find(|n| self.with(*n, |f| f.id() == Some(id)))
    }

    fn root(&self) -> Node {
        Node(ROOT)
    }

    fn head(&self) -> Node {
        Node(HEAD)
    }

    fn body(&self) -> Node {
        Node(BODY)
    }

    fn contains(&self, ancestor: Node, node: Node) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    fn create(&self, tag: &str) -> Node {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode::new(tag));
        Node((nodes.len() - 1) as u32)
    }

    fn append(&self, parent: Node, child: Node) {
        self.detach(child);
        self.with_mut(parent, |p| p.children.push(child.0));
        self.with_mut(child, |c| c.parent = Some(parent.0));
    }

    fn prepend(&self, parent: Node, child: Node) {
        self.detach(child);
        self.with_mut(parent, |p| p.children.insert(0, child.0));
        self.with_mut(child, |c| c.parent = Some(parent.0));
    }

    fn detach(&self, node: Node) {
        self.detach_log.borrow_mut().push(node);
        self.unlink(node);
    }

    fn is_attached(&self, node: Node) -> bool {
        self.contains(self.root(), node)
    }

    fn add_class(&self, node: Node, class: &str) {
        let mut classes = self.class_list(node);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
            self.set_classes(node, classes);
        }
    }

    fn remove_class(&self, node: Node, class: &str) {
        let mut classes = self.class_list(node);
        classes.retain(|c| c != class);
        self.set_classes(node, classes);
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.with(node, |n| n.has_class(class))
    }

    fn class_name(&self, node: Node) -> String {
        self.attr(node, "class").unwrap_or_default()
    }

    fn set_class_name(&self, node: Node, value: &str) {
        self.set_attr(node, "class", value);
    }

    fn attr(&self, node: Node, name: &str) -> Option<String> {
        self.with(node, |n| n.attrs.get(name).cloned())
    }

    fn set_attr(&self, node: Node, name: &str, value: &str) {
        self.with_mut(node, |n| {
            n.attrs.insert(name.to_owned(), value.to_owned());
        });
    }

    fn remove_attr(&self, node: Node, name: &str) {
        self.with_mut(node, |n| {
            n.attrs.remove(name);
        });
    }

    fn tag(&self, node: Node) -> String {
        self.with(node, |n| n.tag.clone())
    }

    fn text(&self, node: Node) -> String {
        self.with(node, |n| n.text.clone())
    }

    fn set_text(&self, node: Node, text: &str) {
        self.with_mut(node, |n| n.text = text.to_owned());
    }

    fn html(&self, node: Node) -> String {
        self.with(node, |n| n.html.clone())
    }

    fn set_html(&self, node: Node, html: &str) {
        self.with_mut(node, |n| n.html = html.to_owned());
    }

    fn style(&self, node: Node, property: &str) -> String {
        self.with(node, |n| n.styles.get(property).cloned().unwrap_or_default())
    }

    fn set_style(&self, node: Node, property: &str, value: &str) {
        self.with_mut(node, |n| {
            if value.is_empty() {
                n.styles.remove(property);
            } else {
                n.styles.insert(property.to_owned(), value.to_owned());
            }
        });
    }

    fn value(&self, node: Node) -> String {
        self.with(node, |n| n.value.clone())
    }

    fn set_value(&self, node: Node, value: &str) {
        self.with_mut(node, |n| n.value = value.to_owned());
    }

    fn is_checked(&self, node: Node) -> bool {
        self.with(node, |n| n.checked)
    }

    fn set_disabled(&self, node: Node, disabled: bool) {
        self.with_mut(node, |n| n.disabled = disabled);
    }

    fn reset_form(&self, form: Node) {
        for control in self.find_within(form, Role::FormControl) {
            self.with_mut(control, |n| {
                n.value.clear();
                n.checked = false;
            });
        }
    }

    fn focus(&self, node: Node) {
        self.active.set(Some(node));
    }

    fn blur(&self, node: Node) {
        if self.active.get() == Some(node) {
            self.active.set(None);
        }
    }

    fn active_element(&self) -> Option<Node> {
        self.active.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.scroll_log.borrow_mut().push(y);
    }

    fn document_height(&self) -> f64 {
        self.document_height.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn offset_top(&self, node: Node) -> f64 {
        self.with(node, |n| n.offset_top)
    }
}
