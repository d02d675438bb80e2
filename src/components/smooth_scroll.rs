use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::dom::{self, Listener};
use crate::error::{DomError, DomResult};

/// Height of the fixed navbar the target must clear.
pub const NAV_OFFSET_PX: f64 = 80.0;

const IN_PAGE_ANCHOR: &str = "a[href^='#']";

/// Id an in-page href points at. A bare `#` points nowhere.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target_top(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - NAV_OFFSET_PX
}

fn on_click(event: &Event) -> DomResult<()> {
    let Some(clicked) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(anchor) = clicked
        .closest(IN_PAGE_ANCHOR)
        .map_err(|e| DomError::js("closest", e))?
    else {
        return Ok(());
    };
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(target) = anchor_target_id(&href).map(dom::by_id).transpose()?.flatten() else {
        // Unresolved targets keep the browser's default jump.
        return Ok(());
    };

    event.prevent_default();
    let window = dom::window()?;
    let scroll_y = window.scroll_y().map_err(|e| DomError::js("scrollY", e))?;
    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(target.get_bounding_client_rect().top(), scroll_y));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls every in-page anchor on the page, including ones rendered later.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_effect_with_deps(
        move |_| {
            let listener = dom::document().and_then(|document| {
                Listener::new(&document, "click", false, |event| {
                    if let Err(e) = on_click(&event) {
                        error!("anchor scroll: {}", e);
                    }
                })
            });
            if let Err(e) = &listener {
                error!("anchor scroll listener: {}", e);
            }
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_resolve_to_ids() {
        assert_eq!(anchor_target_id("#faq"), Some("faq"));
        assert_eq!(anchor_target_id("#como-funciona"), Some("como-funciona"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("https://wa.me/56912345678"), None);
    }

    #[test]
    fn target_clears_the_navbar() {
        assert_eq!(scroll_target_top(500.0, 0.0), 420.0);
        assert_eq!(scroll_target_top(-200.0, 1000.0), 720.0);
        assert_eq!(scroll_target_top(80.0, 0.0), 0.0);
    }
}
