use log::{debug, error};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::{self, Listener};

/// Past this many pixels of vertical scroll the navbar turns solid.
pub const SCROLLED_AFTER_PX: f64 = 40.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_AFTER_PX
}

/// New navbar state when a scroll to `offset` crosses the threshold, else `None`.
pub fn scroll_change(scrolled: bool, offset: f64) -> Option<bool> {
    let next = is_scrolled(offset);
    (next != scrolled).then_some(next)
}

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#funciones", "Funciones"),
    ("#como-funciona", "Cómo funciona"),
    ("#faq", "Preguntas"),
    ("#contacto", "Contacto"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Menu links always close the menu, whatever its state.
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn display(self) -> &'static str {
        if self.open { "flex" } else { "none" }
    }

    /// Inline style for each of the three hamburger strokes; empty when closed.
    pub fn stroke_styles(self) -> [&'static str; 3] {
        if self.open {
            [
                "transform: rotate(45deg) translate(5px, 5px);",
                "opacity: 0;",
                "transform: rotate(-45deg) translate(5px, -5px);",
            ]
        } else {
            ["", "", ""]
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().and_then(|window| {
                    let win = window.clone();
                    let mut current = false;
                    Listener::new(&window, "scroll", true, move |_| {
                        let offset = win.scroll_y().unwrap_or(0.0);
                        if let Some(next) = scroll_change(current, offset) {
                            current = next;
                            scrolled.set(next);
                        }
                    })
                });
                if let Err(e) = &listener {
                    error!("navbar scroll listener: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            debug!("mobile menu open: {}", next.open);
            menu.set(next);
        })
    };

    // No prevent_default: the link still navigates.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    let [stroke_top, stroke_mid, stroke_bottom] = menu.stroke_styles();

    html! {
        <>
            <nav id="navbar" class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
                <div class="nav-inner">
                    <a href="#inicio" class="nav-logo">{"Comid"}<span>{"App"}</span></a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                    </div>
                    <a href="#contacto" class="nav-cta">{"Agenda una demo"}</a>
                    <button id="navToggle" class="nav-toggle" aria-label="Menú" onclick={toggle_menu}>
                        <span style={stroke_top}></span>
                        <span style={stroke_mid}></span>
                        <span style={stroke_bottom}></span>
                    </button>
                </div>
            </nav>
            <div id="mobileMenu" class="mobile-menu" style={format!("display: {};", menu.display())}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                }) }
                <a href="#contacto" class="nav-cta" onclick={close_menu.clone()}>{"Agenda una demo"}</a>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                    box-shadow: 0 1px 0 var(--border);
                }
                .nav-inner {
                    max-width: 1160px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-logo {
                    font-weight: 800;
                    font-size: 1.4rem;
                    color: var(--text);
                    text-decoration: none;
                }
                .nav-logo span {
                    color: var(--accent);
                }
                .nav-links {
                    display: flex;
                    gap: 1.75rem;
                    margin-left: auto;
                }
                .nav-links a {
                    color: var(--muted);
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-cta {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    margin-left: auto;
                }
                .nav-toggle span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: var(--text);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .mobile-menu {
                    position: fixed;
                    top: 64px;
                    left: 0;
                    right: 0;
                    z-index: 99;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: var(--bg);
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08);
                }
                .mobile-menu a {
                    color: var(--text);
                    text-decoration: none;
                    font-size: 1.1rem;
                }
                @media (max-width: 860px) {
                    .nav-links, .nav-inner > .nav-cta {
                        display: none;
                    }
                    .nav-toggle {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(40.0));
        assert!(is_scrolled(40.5));
        assert!(is_scrolled(2000.0));
    }

    #[test]
    fn only_threshold_crossings_change_state() {
        let offsets = [0.0, 10.0, 39.0, 41.0, 300.0, 900.0, 41.0, 40.0, 12.0, 0.0];
        let mut scrolled = false;
        let mut changes = Vec::new();
        for offset in offsets {
            if let Some(next) = scroll_change(scrolled, offset) {
                scrolled = next;
                changes.push(next);
            }
        }
        assert_eq!(changes, vec![true, false]);
        assert!(!scrolled);
    }

    #[test]
    fn toggling_twice_restores_menu() {
        let start = MenuState::default();
        assert_eq!(start.display(), "none");
        let open = start.toggled();
        assert_eq!(open.display(), "flex");
        assert_eq!(open.stroke_styles()[1], "opacity: 0;");
        let back = open.toggled();
        assert_eq!(back, start);
        assert_eq!(back.display(), start.display());
        assert_eq!(back.stroke_styles(), start.stroke_styles());
    }

    #[test]
    fn link_click_closes_from_either_state() {
        assert!(!MenuState { open: true }.closed().open);
        assert!(!MenuState { open: false }.closed().open);
        assert_eq!(MenuState { open: true }.closed().stroke_styles(), ["", "", ""]);
    }
}
