//! `View` over the live document.
//!
//! Elements are handed to the core as [`Node`] ids. A `WeakMap` keyed by
//! element gives the reverse lookup, so the same element always maps to the
//! same node while it is registered. Ids are never reused: a handle to a
//! released element resolves to nothing and every operation on it is a
//! no-op.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use js_sys::{Object, WeakMap};
use vt_core::{Node, Role, View};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

const ROOT: Node = Node(0);
const HEAD: Node = Node(1);
const BODY: Node = Node(2);

fn key(el: &Element) -> &Object {
    el.as_ref()
}

pub struct DomView {
    window: Window,
    document: Document,
    elements: RefCell<HashMap<u32, Element>>,
    ids: WeakMap,
    next_id: Cell<u32>,
}

impl DomView {
    pub fn new() -> Result<Self, JsValue> {
        let window = gloo_utils::window();
        let document = gloo_utils::document();
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        let head: Element = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?
            .into();
        let body: Element = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?
            .into();
        let view = Self {
            window,
            document,
            elements: RefCell::new(HashMap::new()),
            ids: WeakMap::new(),
            next_id: Cell::new(0),
        };
        for (node, el) in [(ROOT, root), (HEAD, head), (BODY, body)] {
            view.register(node, el);
        }
        view.next_id.set(BODY.0 + 1);
        Ok(view)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Node for `el`, registering it on first sight.
    pub fn node_for(&self, el: &Element) -> Node {
        if let Some(id) = self.ids.get(key(el)).as_f64() {
            return Node(id as u32);
        }
        let node = Node(self.next_id.get());
        self.next_id.set(node.0 + 1);
        self.register(node, el.clone());
        node
    }

    fn register(&self, node: Node, el: Element) {
        self.ids.set(key(&el), &JsValue::from(node.0));
        self.elements.borrow_mut().insert(node.0, el);
    }

    fn release(&self, node: Node) {
        if let Some(el) = self.elements.borrow_mut().remove(&node.0) {
            self.ids.delete(key(&el));
        }
    }

    /// Release every registered element strictly inside `el`.
    fn release_descendants(&self, el: &Element) {
        let inside: Vec<u32> = self
            .elements
            .borrow()
            .iter()
            .filter(|(_, known)| *known != el && el.contains(Some(known.as_ref())))
            .map(|(id, _)| *id)
            .collect();
        for id in inside {
            self.release(Node(id));
        }
    }

    /// Node for an event target, if it is an element.
    pub fn node_for_target(&self, target: Option<web_sys::EventTarget>) -> Option<Node> {
        target
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(|el| self.node_for(&el))
    }

    pub fn element(&self, node: Node) -> Option<Element> {
        self.elements.borrow().get(&node.0).cloned()
    }

    fn html_element(&self, node: Node) -> Option<HtmlElement> {
        self.element(node)?.dyn_into::<HtmlElement>().ok()
    }

    fn collect(&self, list: Result<NodeList, JsValue>) -> Vec<Node> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .map(|el| self.node_for(&el))
            .collect()
    }
}

impl View for DomView {
    fn find_all(&self, role: Role) -> Vec<Node> {
        self.collect(self.document.query_selector_all(role.selector()))
    }

    fn find_within(&self, parent: Node, role: Role) -> Vec<Node> {
        match self.element(parent) {
            Some(el) => self.collect(el.query_selector_all(role.selector())),
            None => Vec::new(),
        }
    }

    fn closest(&self, node: Node, role: Role) -> Option<Node> {
        let found = self.element(node)?.closest(role.selector()).ok()??;
        Some(self.node_for(&found))
    }

    fn by_id(&self, id: &str) -> Option<Node> {
        let el = self.document.get_element_by_id(id)?;
        Some(self.node_for(&el))
    }

    fn root(&self) -> Node {
        ROOT
    }

    fn head(&self) -> Node {
        HEAD
    }

    fn body(&self) -> Node {
        BODY
    }

    fn contains(&self, ancestor: Node, node: Node) -> bool {
        match (self.element(ancestor), self.element(node)) {
            (Some(a), Some(n)) => a.contains(Some(n.as_ref())),
            _ => false,
        }
    }

    fn create(&self, tag: &str) -> Node {
        let el = self
            .document
            .create_element(tag)
            .expect("static tag names are valid");
        self.node_for(&el)
    }

    fn append(&self, parent: Node, child: Node) {
        if let (Some(p), Some(c)) = (self.element(parent), self.element(child)) {
            let _ = p.append_child(&c);
        }
    }

    fn prepend(&self, parent: Node, child: Node) {
        if let (Some(p), Some(c)) = (self.element(parent), self.element(child)) {
            let _ = p.prepend_with_node_1(&c);
        }
    }

    fn detach(&self, node: Node) {
        if matches!(node, ROOT | HEAD | BODY) {
            return;
        }
        if let Some(el) = self.element(node) {
            el.remove();
            self.release_descendants(&el);
            self.release(node);
        }
    }

    fn is_attached(&self, node: Node) -> bool {
        self.element(node).is_some_and(|el| el.is_connected())
    }

    fn add_class(&self, node: Node, class: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&self, node: Node, class: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.class_list().remove_1(class);
        }
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn class_name(&self, node: Node) -> String {
        self.element(node).map(|el| el.class_name()).unwrap_or_default()
    }

    fn set_class_name(&self, node: Node, value: &str) {
        if let Some(el) = self.element(node) {
            el.set_class_name(value);
        }
    }

    fn attr(&self, node: Node, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn set_attr(&self, node: Node, name: &str, value: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn remove_attr(&self, node: Node, name: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.remove_attribute(name);
        }
    }

    fn tag(&self, node: Node) -> String {
        self.element(node)
            .map(|el| el.tag_name().to_lowercase())
            .unwrap_or_default()
    }

    fn text(&self, node: Node) -> String {
        self.element(node)
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn set_text(&self, node: Node, text: &str) {
        if let Some(el) = self.element(node) {
            el.set_text_content(Some(text));
        }
    }

    fn html(&self, node: Node) -> String {
        self.element(node).map(|el| el.inner_html()).unwrap_or_default()
    }

    fn set_html(&self, node: Node, html: &str) {
        if let Some(el) = self.element(node) {
            self.release_descendants(&el);
            el.set_inner_html(html);
        }
    }

    fn style(&self, node: Node, property: &str) -> String {
        self.html_element(node)
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, node: Node, property: &str, value: &str) {
        if let Some(el) = self.html_element(node) {
            let _ = el.style().set_property(property, value);
        }
    }

    fn value(&self, node: Node) -> String {
        let Some(el) = self.element(node) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, node: Node, value: &str) {
        let Some(el) = self.element(node) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn is_checked(&self, node: Node) -> bool {
        self.element(node)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }

    fn set_disabled(&self, node: Node, disabled: bool) {
        if let Some(el) = self.element(node) {
            let _ = el.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn reset_form(&self, form: Node) {
        if let Some(form) = self
            .element(form)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn focus(&self, node: Node) {
        if let Some(el) = self.html_element(node) {
            let _ = el.focus();
        }
    }

    fn blur(&self, node: Node) {
        if let Some(el) = self.html_element(node) {
            let _ = el.blur();
        }
    }

    fn active_element(&self) -> Option<Node> {
        let el = self.document.active_element()?;
        Some(self.node_for(&el))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map_or(0.0, |root| root.scroll_height() as f64)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn offset_top(&self, node: Node) -> f64 {
        self.html_element(node)
            .map_or(0.0, |el| el.offset_top() as f64)
    }
}
