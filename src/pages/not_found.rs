use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Página no encontrada"}</h1>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Volver al inicio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .not-found .btn-primary {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
