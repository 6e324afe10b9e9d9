//! Contact form: field validation, phone masking and the simulated submit.

use std::rc::{Rc, Weak};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};
use vt_content::{Severity, strings};

use crate::host::Host;
use crate::notify::Notifier;
use crate::role::Role;
use crate::scheduler::TaskSlot;
use crate::view::{EventOutcome, Node};

pub const MAX_PHONE_DIGITS: usize = 11;
const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9]{4,5}-[0-9]{4}$").expect("static phone pattern")
});

/// Snapshot of one form control, as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub is_checkbox: bool,
    pub checked: bool,
}

impl FieldState {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Error message for `field`, or `None` when it is valid.
///
/// Rules are checked in order and a later failure replaces an earlier one.
pub fn validate_field(field: &FieldState) -> Option<&'static str> {
    let value = field.value.trim();
    let mut error = None;

    if field.required && value.is_empty() {
        error = Some(strings::FIELD_REQUIRED);
    }
    if !value.is_empty() {
        match field.name.as_str() {
            "email" if !EMAIL.is_match(value) => error = Some(strings::INVALID_EMAIL),
            "phone" if !PHONE.is_match(value) => error = Some(strings::INVALID_PHONE),
            "name" if value.chars().count() < MIN_NAME_CHARS => {
                error = Some(strings::NAME_TOO_SHORT)
            }
            "message" if value.chars().count() < MIN_MESSAGE_CHARS => {
                error = Some(strings::MESSAGE_TOO_SHORT)
            }
            _ => {}
        }
    }
    if field.name == "privacy" && field.is_checkbox && !field.checked {
        error = Some(strings::PRIVACY_REQUIRED);
    }
    error
}

/// Brazilian phone mask applied to whatever digits `raw` contains.
///
/// `(DD) DDDDD-DDDD` at 11 digits, `(DD) DDDD-DDDD` at 10, partial masks
/// from 2 digits up. Digits past the eleventh are dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();
    let d = digits.as_str();
    match d.len() {
        11.. => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        6..=9 => format!("({}) {}{}", &d[..2], &d[2..6], &d[6..]),
        2..=5 => format!("({}) {}", &d[..2], &d[2..]),
        _ => digits,
    }
}

pub struct ContactForm {
    host: Host,
    notifier: Rc<Notifier>,
    submission: TaskSlot,
    me: Weak<ContactForm>,
}

impl ContactForm {
    pub fn new(host: Host, notifier: Rc<Notifier>) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            notifier,
            submission: TaskSlot::new(),
            me: me.clone(),
        })
    }

    pub fn form(&self) -> Option<Node> {
        self.host.view().find(Role::ContactForm)
    }

    /// Controls that get blur and input listeners.
    pub fn controls(&self) -> Vec<Node> {
        self.form()
            .map(|form| self.host.view().find_within(form, Role::FormControl))
            .unwrap_or_default()
    }

    fn read(&self, field: Node) -> FieldState {
        let view = self.host.view();
        FieldState {
            name: view.attr(field, "name").unwrap_or_default(),
            value: view.value(field),
            required: view.attr(field, "required").is_some(),
            is_checkbox: view.attr(field, "type").as_deref() == Some("checkbox"),
            checked: view.is_checked(field),
        }
    }

    fn error_node(&self, name: &str) -> Option<Node> {
        self.host.view().by_id(&format!("{name}-error"))
    }

    /// Validate one control and render its error. Returns validity.
    pub fn validate(&self, field: Node) -> bool {
        let state = self.read(field);
        let error = validate_field(&state);
        if let Some(slot) = self.error_node(&state.name) {
            let view = self.host.view();
            view.set_text(slot, error.unwrap_or(""));
            view.toggle_class(field, "error", error.is_some());
        }
        error.is_none()
    }

    pub fn on_blur(&self, field: Node) {
        self.validate(field);
    }

    pub fn on_input(&self, field: Node) {
        let name = self.host.view().attr(field, "name").unwrap_or_default();
        if let Some(slot) = self.error_node(&name) {
            let view = self.host.view();
            view.set_text(slot, "");
            view.remove_class(field, "error");
        }
    }

    pub fn on_phone_input(&self, input: Node) {
        let view = self.host.view();
        let formatted = format_phone(&view.value(input));
        view.set_value(input, &formatted);
    }

    /// Validate every required control, rendering all errors at once.
    pub fn validate_all(&self) -> bool {
        let Some(form) = self.form() else {
            return false;
        };
        self.host
            .view()
            .find_within(form, Role::RequiredField)
            .into_iter()
            .fold(true, |ok, field| self.validate(field) && ok)
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_active(self.host.scheduler())
    }

    /// Submit handler. The native submission is always suppressed.
    pub fn submit(&self) -> EventOutcome {
        if self.is_submitting() {
            debug!("submit ignored while a submission is pending");
            return EventOutcome::PreventDefault;
        }
        if !self.validate_all() {
            debug!("contact form rejected");
            return EventOutcome::PreventDefault;
        }
        let Some(form) = self.form() else {
            return EventOutcome::PreventDefault;
        };
        let view = self.host.view();
        let button = view.find_within(form, Role::SubmitButton).into_iter().next();
        let original = button.map(|b| view.html(b)).unwrap_or_default();
        if let Some(button) = button {
            view.set_html(button, strings::SUBMITTING_HTML);
            view.set_disabled(button, true);
        }

        let me = self.me.clone();
        let handle = self.host.scheduler().set_timeout(
            self.host.config().submit_delay_ms,
            Box::new(move || {
                let Some(me) = me.upgrade() else {
                    return;
                };
                me.notifier.show(strings::SUBMIT_SUCCESS, Severity::Success);
                let view = me.host.view();
                view.reset_form(form);
                if let Some(button) = button {
                    view.set_html(button, &original);
                    view.set_disabled(button, false);
                }
                info!("contact form submitted");
            }),
        );
        self.submission.replace(self.host.scheduler(), handle);
        EventOutcome::PreventDefault
    }
}
