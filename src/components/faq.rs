use log::debug;
use yew::prelude::*;

/// Open/closed state of the FAQ list. At most one answer is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Clicking a question opens it and closes the rest, or closes it if it was open.
    pub fn click(self, index: usize) -> Self {
        match self.open {
            Some(current) if current == index => Self { open: None },
            _ => Self { open: Some(index) },
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}

const QUESTIONS: [(&str, &str); 6] = [
    (
        "¿Necesito cambiar mi sistema de caja?",
        "No. ComidApp funciona junto a tu punto de venta actual: tomas pedidos por WhatsApp y los ves ordenados en un solo panel.",
    ),
    (
        "¿Cuánto demora la puesta en marcha?",
        "La mayoría de los locales quedan operando en menos de 48 horas. Cargamos tu carta y configuramos el número contigo.",
    ),
    (
        "¿Mis clientes tienen que descargar algo?",
        "No. Piden desde el WhatsApp que ya usan, con un menú que se abre en el navegador.",
    ),
    (
        "¿Cobran comisión por pedido?",
        "No cobramos comisión. Pagas un plan mensual fijo según el tamaño de tu local.",
    ),
    (
        "¿Puedo usarlo con delivery propio?",
        "Sí. Defines zonas y tarifas de despacho, y tus repartidores reciben el detalle de cada pedido.",
    ),
    (
        "¿Qué pasa si quiero cancelar?",
        "Cancelas cuando quieras, sin contratos de permanencia. Tus datos de clientes son tuyos y puedes exportarlos.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="section-inner">
                <h2 class="section-title" data-animate="">{"Preguntas frecuentes"}</h2>
                <div class="faq-list">
                    { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                        let open = accordion.is_open(index);
                        let onclick = {
                            let accordion = accordion.clone();
                            Callback::from(move |_: MouseEvent| {
                                let next = accordion.click(index);
                                debug!("faq open item: {:?}", next.open_item());
                                accordion.set(next);
                            })
                        };
                        html! {
                            <div class="faq-item" data-animate="">
                                <button class={classes!("faq-q", open.then(|| "open"))} {onclick}>
                                    <span>{*question}</span>
                                    <span class="faq-icon">{"+"}</span>
                                </button>
                                <div class={classes!("faq-a", open.then(|| "open"))}>
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 760px;
                    margin: 2.5rem auto 0;
                }
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-q {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    font-size: 1.05rem;
                    color: var(--text);
                    text-align: left;
                    cursor: pointer;
                }
                .faq-icon {
                    font-size: 1.4rem;
                    color: var(--accent);
                    transition: transform 0.3s ease;
                }
                .faq-q.open .faq-icon {
                    transform: rotate(45deg);
                }
                .faq-a {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s ease;
                }
                .faq-a.open {
                    max-height: 320px;
                }
                .faq-a p {
                    margin: 0 0 1.25rem;
                    color: var(--muted);
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let state = Accordion::default().click(1).click(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(1));
    }

    #[test]
    fn clicking_open_item_closes_everything() {
        let state = Accordion::default().click(2).click(2);
        assert_eq!(state.open_item(), None);
        assert!((0..QUESTIONS.len()).all(|i| !state.is_open(i)));
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [0, 0, 4, 1, 1, 5, 2, 3, 3, 3, 0, 5, 5];
        let mut state = Accordion::default();
        for index in clicks {
            state = state.click(index);
            let open = (0..QUESTIONS.len()).filter(|i| state.is_open(*i)).count();
            assert!(open <= 1);
        }
    }
}
