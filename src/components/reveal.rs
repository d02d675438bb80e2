use gloo_timers::callback::Timeout;
use log::error;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::animation::stagger_delay;
use crate::dom::{self, Watcher};
use crate::error::DomResult;

pub const REVEAL_MARKER: &str = "[data-animate]";
const PENDING_REVEAL: &str = "[data-animate]:not(.visible)";
const VISIBLE: &str = "visible";
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -60px 0px";

/// Position of `target` among the siblings still waiting to be revealed.
pub fn stagger_index<T: PartialEq>(pending: &[T], target: &T) -> usize {
    pending.iter().position(|el| el == target).unwrap_or(0)
}

/// What to do with an observer entry: `Some(delay)` means add `visible` after
/// `delay` ms and stop observing. Leaving the viewport never does anything.
pub fn reveal_step(is_intersecting: bool, pending_index: usize) -> Option<u32> {
    is_intersecting.then(|| stagger_delay(pending_index))
}

fn reveal(entry: IntersectionObserverEntry, observer: &IntersectionObserver) -> DomResult<()> {
    let intersecting = entry.is_intersecting();
    let target = entry.target();
    let index = match target.parent_element() {
        Some(parent) if intersecting => {
            stagger_index(&dom::query_all_in(&parent, PENDING_REVEAL)?, &target)
        }
        _ => 0,
    };
    let Some(delay) = reveal_step(intersecting, index) else {
        return Ok(());
    };

    let element: Element = target.clone();
    Timeout::new(delay, move || {
        if let Err(e) = dom::set_class(&element, VISIBLE, true) {
            error!("reveal: {}", e);
        }
    })
    .forget();

    // One-shot: scrolling away never hides it again.
    observer.unobserve(&target);
    Ok(())
}

/// Fades in every `[data-animate]` element the first time it scrolls into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let watcher = Watcher::new(THRESHOLD, Some(ROOT_MARGIN), |entry, observer| {
                if let Err(e) = reveal(entry, observer) {
                    error!("reveal: {}", e);
                }
            })
            .and_then(|watcher| {
                for element in dom::query_all(REVEAL_MARKER)? {
                    watcher.observe(&element);
                }
                Ok(watcher)
            });
            if let Err(e) = &watcher {
                error!("reveal observer: {}", e);
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
    fn cascade_follows_pending_order() {
        let pending = ["card-a", "card-b", "card-c"];
        assert_eq!(stagger_index(&pending, &"card-a"), 0);
        assert_eq!(stagger_index(&pending, &"card-c"), 2);
        assert_eq!(stagger_delay(stagger_index(&pending, &"card-c")), 160);
    }

    #[test]
    fn revealed_siblings_do_not_count() {
        // card-a already visible, so card-b leads the next cascade.
        let pending = ["card-b", "card-c"];
        assert_eq!(stagger_index(&pending, &"card-b"), 0);
    }

    #[derive(Default)]
    struct Card {
        observed: bool,
        visible: bool,
        reveals: usize,
    }

    // Mimics the browser: entries only arrive for observed elements.
    fn scroll(card: &mut Card, intersecting: bool) {
        if !card.observed {
            return;
        }
        if let Some(_delay) = reveal_step(intersecting, 0) {
            card.visible = true;
            card.reveals += 1;
            card.observed = false;
        }
    }

    #[test]
    fn leaving_the_viewport_does_nothing() {
        assert_eq!(reveal_step(false, 0), None);
        assert_eq!(reveal_step(false, 4), None);
        assert_eq!(reveal_step(true, 2), Some(160));
    }

    #[test]
    fn revealed_once_and_never_hidden() {
        let mut card = Card { observed: true, ..Card::default() };
        scroll(&mut card, false);
        assert!(!card.visible);
        for intersecting in [true, false, true, false, false, true] {
            scroll(&mut card, intersecting);
            assert!(card.visible);
        }
        assert_eq!(card.reveals, 1);
        assert!(!card.observed);
    }

    #[test]
    fn unknown_target_reveals_immediately() {
        let pending: [&str; 0] = [];
        assert_eq!(stagger_delay(stagger_index(&pending, &"card-x")), 0);
    }
}
