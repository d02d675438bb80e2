use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::{
    active_nav::use_active_nav_highlight,
    contact::ContactForm,
    faq::Faq,
    hero::Hero,
    navbar::Navbar,
    reveal::use_scroll_reveal,
    smooth_scroll::use_smooth_anchor_scroll,
};

const FEATURES: [(&str, &str, &str); 6] = [
    ("📲", "Pedidos ordenados", "Cada mensaje de WhatsApp se convierte en un pedido con detalle, total y hora de entrega."),
    ("📋", "Carta digital", "Tu menú con fotos y precios, listo para compartir con un enlace. Lo actualizas en segundos."),
    ("🔔", "Avisos al instante", "Suena una alerta en la cocina con cada pedido nuevo, para que ninguno se quede sin responder."),
    ("🛵", "Delivery y retiro", "Zonas de despacho, costos por comuna y horarios de retiro configurables."),
    ("📊", "Ventas claras", "Reportes diarios y semanales de tus productos más vendidos y tus mejores clientes."),
    ("🤝", "Clientes que vuelven", "Guarda el historial de cada cliente y envíale promociones por el mismo chat."),
];

const STEPS: [(&str, &str); 3] = [
    ("Conectamos tu WhatsApp", "Usamos el número que tus clientes ya conocen. No cambias nada."),
    ("Subimos tu carta", "Nos envías tu menú y lo dejamos listo con precios y categorías."),
    ("Empiezas a recibir pedidos", "Tus clientes piden por chat y tú los gestionas desde el panel."),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_smooth_anchor_scroll();
    use_scroll_reveal();
    use_active_nav_highlight();

    let year = Local::now().year();

    html! {
        <div class="landing">
            <Navbar />
            <Hero />
            <section id="funciones" class="features-section">
                <div class="section-inner">
                    <h2 class="section-title" data-animate="">{"Todo lo que tu local necesita para vender por chat"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <article class="feature-card" data-animate="">
                                <span class="feature-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </section>
            <section id="como-funciona" class="steps-section">
                <div class="section-inner">
                    <h2 class="section-title" data-animate="">{"Cómo funciona"}</h2>
                    <ol class="steps">
                        { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <li class="step" data-animate="">
                                <span class="step-num">{(i + 1).to_string()}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>
            <Faq />
            <ContactForm />
            <footer class="footer">
                <div class="section-inner footer-inner">
                    <a href="#inicio" class="nav-logo">{"Comid"}<span>{"App"}</span></a>
                    <span>{format!("© {} ComidApp.cl · Hecho en Chile", year)}</span>
                </div>
            </footer>
            <style>
                {r#"
                .section-inner {
                    max-width: 1160px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .features-section,
                .steps-section,
                .faq-section,
                .contact-section {
                    padding: 6rem 0;
                }
                .steps-section {
                    background: #fff;
                }
                .section-title {
                    font-size: 2.2rem;
                    text-align: center;
                    max-width: 680px;
                    margin: 0 auto;
                }
                .contact-section .section-title {
                    text-align: left;
                }
                [data-animate] {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                [data-animate].visible {
                    opacity: 1;
                    transform: none;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .feature-card {
                    background: #fff;
                    border: 1px solid var(--border);
                    border-radius: 18px;
                    padding: 1.75rem;
                }
                .feature-icon {
                    font-size: 1.8rem;
                }
                .feature-card p,
                .step p {
                    color: var(--muted);
                    line-height: 1.6;
                }
                .steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .step-num {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 700;
                }
                .btn-primary,
                .btn-ghost {
                    display: inline-block;
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    font: inherit;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }
                .btn-primary {
                    background: var(--accent);
                    color: #fff;
                    border: none;
                }
                .btn-ghost {
                    color: var(--text);
                    border: 1px solid var(--border);
                }
                .footer {
                    padding: 2rem 0;
                    border-top: 1px solid var(--border);
                    color: var(--muted);
                }
                .footer-inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                @media (max-width: 860px) {
                    .features-grid,
                    .steps {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
