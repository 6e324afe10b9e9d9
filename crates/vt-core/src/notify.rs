//! Transient toast notifications.

use std::rc::{Rc, Weak};

use tracing::debug;
use vt_content::Severity;
use vt_content::notice::render_notification;

use crate::a11y::LiveRegion;
use crate::host::Host;
use crate::view::Node;

pub struct Notifier {
    host: Host,
    live: Rc<LiveRegion>,
    me: Weak<Notifier>,
}

impl Notifier {
    pub fn new(host: Host, live: Rc<LiveRegion>) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            live,
            me: me.clone(),
        })
    }

    /// Append a toast, slide it in, and remove it after the dismiss delay.
    /// Each toast runs its own timers; several may be on screen at once.
    pub fn show(&self, message: &str, severity: Severity) -> Node {
        let view = self.host.view();
        let cfg = self.host.config();

        let toast = view.create("div");
        view.set_class_name(toast, &severity.class_name());
        view.set_html(toast, &render_notification(message, severity));
        view.append(view.body(), toast);
        debug!(severity = severity.key(), "notification shown");

        let me = self.me.clone();
        self.host.scheduler().set_timeout(
            cfg.notification_show_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.host.view().add_class(toast, "show");
                }
            }),
        );

        let me = self.me.clone();
        self.host.scheduler().set_timeout(
            cfg.notification_dismiss_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.dismiss(toast);
                }
            }),
        );

        self.live.announce(message);
        toast
    }

    fn dismiss(&self, toast: Node) {
        self.host.view().remove_class(toast, "show");
        let me = self.me.clone();
        self.host.scheduler().set_timeout(
            self.host.config().notification_remove_ms,
            Box::new(move || {
                // Also sent for toasts the visitor already closed, so the
                // view can drop its handle.
                if let Some(me) = me.upgrade() {
                    me.host.view().detach(toast);
                }
            }),
        );
    }
}
