use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::{
    bar_plan, counter_value, progress, CounterText, BAR_TRANSITION, COUNTER_DURATION_MS,
    NOTIF_REPLAY_MS,
};
use crate::config;
use crate::dom::{self, Listener, Watcher};
use crate::error::{DomError, DomResult};

const BAR_HEIGHTS: [u32; 7] = [38, 52, 45, 68, 60, 82, 74];
const TRUST_THRESHOLD: f64 = 0.5;

/// Counts the number in `element`'s text up from 0, easing out over `duration` ms.
/// The text around the number is left as it was.
pub fn animate_counter(element: Element, counter: CounterText, duration: f64) -> DomResult<()> {
    let window = dom::window()?;
    let start = window.performance().map(|p| p.now()).unwrap_or(0.0);

    // The frame closure keeps itself alive to schedule the next frame.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let win = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let p = progress(start, now, duration);
        element.set_text_content(Some(&counter.render(counter_value(counter.target(), p))));
        if p < 1.0 {
            if let Some(callback) = next_frame.borrow().as_ref() {
                if let Err(e) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    error!("counter: {}", DomError::js("requestAnimationFrame", e));
                }
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let borrowed = frame.borrow();
    let Some(callback) = borrowed.as_ref() else {
        return Ok(());
    };
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|e| DomError::js("requestAnimationFrame", e))
}

/// Drops every chart bar to zero, then grows each back to its declared height.
fn grow_chart_bars() -> DomResult<()> {
    let bars = dom::query_all(".mc-bar")?;
    let declared = bars
        .iter()
        .map(|bar| dom::style_of(bar, "height"))
        .collect::<DomResult<Vec<_>>>()?;
    for (bar, (delay, target_height)) in bars.into_iter().zip(bar_plan(declared)) {
        dom::set_style(&bar, "height", "0%")?;
        Timeout::new(delay, move || {
            let grown = dom::set_style(&bar, "transition", BAR_TRANSITION)
                .and_then(|_| dom::set_style(&bar, "height", &target_height));
            if let Err(e) = grown {
                error!("chart bar: {}", e);
            }
        })
        .forget();
    }
    Ok(())
}

/// Restarts the floating notification's entrance animation.
fn replay_notification() -> DomResult<()> {
    let Some(notif) = dom::query(".notif-float")? else {
        return Ok(());
    };
    dom::set_style(&notif, "animation", "none")?;
    // Reading layout forces the reflow that makes the animation start over.
    let _ = dom::as_html(&notif)?.offset_width();
    dom::clear_style(&notif, "animation")
}

fn on_trust_visible(target: &Element) -> DomResult<()> {
    if !config::animate_trust_counters() {
        return Ok(());
    }
    for number in dom::query_all_in(target, ".trust-item strong")? {
        let text = number.text_content().unwrap_or_default();
        if let Some(counter) = CounterText::parse(&text) {
            animate_counter(number, counter, COUNTER_DURATION_MS)?;
        }
    }
    Ok(())
}

#[function_component(Hero)]
pub fn hero() -> Html {
    use_effect_with_deps(
        move |_| {
            let load_listener = dom::document().and_then(|document| {
                if document.ready_state() == "complete" {
                    grow_chart_bars()?;
                    return Ok(None);
                }
                let window = dom::window()?;
                Listener::new(&window, "load", false, |_| {
                    if let Err(e) = grow_chart_bars() {
                        error!("chart bars: {}", e);
                    }
                })
                .map(Some)
            });
            if let Err(e) = &load_listener {
                error!("chart bars: {}", e);
            }

            let trust_watcher = Watcher::new(TRUST_THRESHOLD, None, |entry, observer| {
                if entry.is_intersecting() {
                    let target = entry.target();
                    if let Err(e) = on_trust_visible(&target) {
                        error!("trust counters: {}", e);
                    }
                    observer.unobserve(&target);
                }
            })
            .and_then(|watcher| {
                if let Some(trust) = dom::query(".hero-trust")? {
                    watcher.observe(&trust);
                }
                Ok(watcher)
            });
            if let Err(e) = &trust_watcher {
                error!("trust observer: {}", e);
            }

            move || {
                drop(load_listener);
                drop(trust_watcher);
            }
        },
        (),
    );

    use_interval(
        move || {
            if let Err(e) = replay_notification() {
                error!("notification replay: {}", e);
            } else {
                debug!("notification replayed");
            }
        },
        NOTIF_REPLAY_MS,
    );

    html! {
        <section id="inicio" class="hero">
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <span class="hero-badge" data-animate="">{"Pedidos por WhatsApp para restaurantes"}</span>
                    <h1 data-animate="">{"Tu local vende más cuando pedir es "}<em>{"así de fácil"}</em></h1>
                    <p class="hero-lead" data-animate="">
                        {"ComidApp ordena los pedidos que llegan por WhatsApp, muestra tu carta en segundos y te avisa cada venta. Sin comisiones."}
                    </p>
                    <div class="hero-actions" data-animate="">
                        <a href="#contacto" class="btn-primary">{"Agenda una demo"}</a>
                        <a href="#como-funciona" class="btn-ghost">{"Ver cómo funciona"}</a>
                    </div>
                    <div class="hero-trust" data-animate="">
                        <div class="trust-item"><strong>{"+1.200"}</strong><span>{"locales activos"}</span></div>
                        <div class="trust-item"><strong>{"98%"}</strong><span>{"pedidos sin errores"}</span></div>
                        <div class="trust-item"><strong>{"24/7"}</strong><span>{"soporte"}</span></div>
                    </div>
                </div>
                <div class="hero-visual" data-animate="">
                    <div class="mini-chart">
                        <div class="mc-head">
                            <span>{"Ventas de la semana"}</span>
                            <strong>{"+32%"}</strong>
                        </div>
                        <div class="mc-bars">
                            { for BAR_HEIGHTS.iter().map(|height| html! {
                                <div class="mc-bar" style={format!("height: {}%;", height)}></div>
                            }) }
                        </div>
                    </div>
                    <div class="notif-float">
                        <span class="notif-dot"></span>
                        <div>
                            <strong>{"Nuevo pedido #1042"}</strong>
                            <span>{"2 completos + 1 bebida · $8.900"}</span>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    padding: 9rem 0 5rem;
                    background: radial-gradient(circle at 80% 20%, var(--accent-soft), transparent 55%);
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1.1fr 0.9fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 0.9rem;
                    border-radius: 999px;
                    background: var(--accent-soft);
                    color: var(--accent);
                    font-weight: 600;
                    font-size: 0.85rem;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    line-height: 1.1;
                    margin: 1.25rem 0;
                }
                .hero h1 em {
                    font-style: normal;
                    color: var(--accent);
                }
                .hero-lead {
                    font-size: 1.15rem;
                    color: var(--muted);
                    line-height: 1.6;
                    max-width: 520px;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .hero-trust {
                    display: flex;
                    gap: 2rem;
                }
                .trust-item strong {
                    display: block;
                    font-size: 1.6rem;
                }
                .trust-item span {
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .hero-visual {
                    position: relative;
                }
                .mini-chart {
                    background: #fff;
                    border-radius: 20px;
                    padding: 1.5rem;
                    box-shadow: 0 30px 60px rgba(0, 0, 0, 0.08);
                }
                .mc-head {
                    display: flex;
                    justify-content: space-between;
                    color: var(--muted);
                }
                .mc-head strong {
                    color: var(--accent);
                }
                .mc-bars {
                    display: flex;
                    align-items: flex-end;
                    gap: 0.6rem;
                    height: 180px;
                    margin-top: 1.5rem;
                }
                .mc-bar {
                    flex: 1;
                    border-radius: 6px 6px 0 0;
                    background: linear-gradient(to top, var(--accent), #ffb37a);
                }
                .notif-float {
                    position: absolute;
                    left: -2rem;
                    bottom: -1.5rem;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: #fff;
                    padding: 0.9rem 1.2rem;
                    border-radius: 14px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                    animation: notifIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                }
                .notif-float strong,
                .notif-float span {
                    display: block;
                    font-size: 0.85rem;
                }
                .notif-float span {
                    color: var(--muted);
                }
                .notif-float .notif-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: #25d366;
                }
                @keyframes notifIn {
                    from { transform: translateY(20px) scale(0.95); opacity: 0; }
                    to { transform: translateY(0) scale(1); opacity: 1; }
                }
                @media (max-width: 860px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 2.3rem;
                    }
                    .notif-float {
                        left: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
