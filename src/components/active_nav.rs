use log::error;
use web_sys::IntersectionObserverEntry;
use yew::prelude::*;

use crate::dom::{self, Watcher};
use crate::error::DomResult;

const THRESHOLD: f64 = 0.4;
const ACTIVE_COLOR: &str = "var(--text)";

pub fn links_to(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

fn highlight(entry: IntersectionObserverEntry) -> DomResult<()> {
    if !entry.is_intersecting() {
        return Ok(());
    }
    let section_id = entry.target().id();
    for link in dom::query_all(".nav-links a")? {
        dom::clear_style(&link, "color")?;
        let href = link.get_attribute("href").unwrap_or_default();
        if links_to(&href, &section_id) {
            dom::set_style(&link, "color", ACTIVE_COLOR)?;
        }
    }
    Ok(())
}

/// Colors the navbar link of whichever section last filled 40% of the viewport.
#[hook]
pub fn use_active_nav_highlight() {
    use_effect_with_deps(
        move |_| {
            let watcher = Watcher::new(THRESHOLD, None, |entry, _| {
                if let Err(e) = highlight(entry) {
                    error!("nav highlight: {}", e);
                }
            })
            .and_then(|watcher| {
                for section in dom::query_all("section[id]")? {
                    watcher.observe(&section);
                }
                Ok(watcher)
            });
            if let Err(e) = &watcher {
                error!("nav highlight observer: {}", e);
            }
            move || drop(watcher)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_the_exact_section() {
        assert!(links_to("#faq", "faq"));
        assert!(!links_to("#faq", "contacto"));
        assert!(!links_to("faq", "faq"));
        assert!(!links_to("#faq-extra", "faq"));
    }
}
