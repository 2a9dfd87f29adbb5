//! Landing page

use leptos::prelude::*;

pub const TITLE: &str = "Tarefas+ | Organize suas tarefas de forma fácil";

#[component]
pub fn HomePage(signed_in: bool) -> impl IntoView {
    let call_to_action = if signed_in {
        view! {
            <a class="button" href="/dashboard">"Ir para o meu painel"</a>
        }
        .into_any()
    } else {
        view! {
            <form id="acessar" class="signin-form" method="post" action="/auth/signin">
                <input class="input" type="email" name="email" placeholder="Seu e-mail" required="required" />
                <input class="input" type="text" name="name" placeholder="Seu nome" />
                <button class="button" type="submit">"Acessar"</button>
            </form>
        }
        .into_any()
    };

    view! {
        <div class="container">
            <main class="main">
                <div class="logo-content">
                    <img class="hero" alt="Logo da Tarefas+" src="/assets/hero.svg" />
                </div>
                <h1 class="title">"Sistema feito para organizar" <br /> "seus estudos e tarefas"</h1>
                {call_to_action}
            </main>
        </div>
    }
}
