//! Page-wide singleton.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Window-level helpers reach the components through here, so they are safe
//! to call before start-up has finished; they simply do nothing.

use std::cell::RefCell;
use std::rc::Rc;

use vt_core::Site;

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

pub fn install(site: Rc<Site>) {
    SITE.with(|s| *s.borrow_mut() = Some(site));
}

pub fn site() -> Option<Rc<Site>> {
    SITE.with(|s| s.borrow().clone())
}

/// Run `f` against the site when it is installed.
pub fn with_site<F>(f: F)
where
    F: FnOnce(&Site),
{
    if let Some(site) = site() {
        f(&site);
    }
}
