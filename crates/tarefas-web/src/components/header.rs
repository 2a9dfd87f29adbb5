//! Top navigation bar

use leptos::prelude::*;
use tarefas_types::UserIdentity;

#[component]
pub fn Header(user: Option<UserIdentity>) -> impl IntoView {
    let account = match user {
        Some(user) => {
            let greeting = format!("Olá {}", user.display_name());
            view! {
                <div class="account">
                    <a class="dashboard-link" href="/dashboard">"Meu Painel"</a>
                    <form method="post" action="/auth/signout">
                        <button class="account-button" type="submit">{greeting}</button>
                    </form>
                </div>
            }
            .into_any()
        }
        None => view! { <a class="account-button" href="/#acessar">"Acessar"</a> }.into_any(),
    };

    view! {
        <header class="header">
            <section class="header-content">
                <nav class="nav">
                    <a href="/">
                        <h1 class="logo">"Tarefas" <span>"+"</span></h1>
                    </a>
                </nav>
                {account}
            </section>
        </header>
    }
}
