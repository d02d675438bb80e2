use log::{debug, error};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::dom;
use crate::error::DomError;
use crate::inquiry::Inquiry;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let local = use_node_ref();
    let nombre = use_node_ref();
    let telefono = use_node_ref();
    let email = use_node_ref();
    let mensaje = use_node_ref();

    let onsubmit = {
        let (local, nombre, telefono, email, mensaje) =
            (local.clone(), nombre.clone(), telefono.clone(), email.clone(), mensaje.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inquiry = Inquiry::new(
                &input_value(&local),
                &input_value(&nombre),
                &input_value(&telefono),
                &input_value(&email),
                &mensaje
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            );
            // Missing required fields: nothing happens.
            let Some(url) = inquiry.whatsapp_url() else {
                return;
            };

            debug!("opening WhatsApp inquiry");
            let opened = dom::window().and_then(|window| {
                window
                    .open_with_url_and_target(&url, "_blank")
                    .map_err(|e| DomError::js("window.open", e))
            });
            if let Err(e) = opened {
                error!("contact form: {}", e);
            }
        })
    };

    html! {
        <section id="contacto" class="contact-section">
            <div class="section-inner contact-grid">
                <div class="contact-copy" data-animate="">
                    <h2 class="section-title">{"Conversemos"}</h2>
                    <p>{"Déjanos tus datos y te escribimos por WhatsApp para mostrarte ComidApp funcionando con la carta de tu local."}</p>
                    <ul class="contact-points">
                        <li>{"Demo de 15 minutos"}</li>
                        <li>{"Sin costo de instalación"}</li>
                        <li>{"Soporte en español, todos los días"}</li>
                    </ul>
                </div>
                <form id="contactForm" class="contact-form" data-animate="" {onsubmit}>
                    <label for="f-local">{"Nombre del local *"}</label>
                    <input id="f-local" type="text" placeholder="Ej: Café X" ref={local} />
                    <label for="f-nombre">{"Tu nombre *"}</label>
                    <input id="f-nombre" type="text" placeholder="Ej: Ana" ref={nombre} />
                    <label for="f-tel">{"WhatsApp *"}</label>
                    <input id="f-tel" type="tel" placeholder="+56 9 1234 5678" ref={telefono} />
                    <label for="f-email">{"Email"}</label>
                    <input id="f-email" type="email" placeholder="opcional" ref={email} />
                    <label for="f-mensaje">{"Mensaje"}</label>
                    <textarea id="f-mensaje" rows="4" placeholder="Cuéntanos sobre tu local (opcional)" ref={mensaje}></textarea>
                    <button type="submit" class="btn-primary">{"Escribir por WhatsApp"}</button>
                </form>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-copy p {
                    color: var(--muted);
                    line-height: 1.6;
                }
                .contact-points {
                    padding-left: 1.2rem;
                    color: var(--text);
                    line-height: 2;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 20px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.06);
                }
                .contact-form label {
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-top: 0.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    font: inherit;
                    padding: 0.75rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 10px;
                }
                .contact-form .btn-primary {
                    margin-top: 1rem;
                }
                @media (max-width: 860px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
