//! Auth Page
//!
//! Login and registration form. A valid submission is logged to the
//! console; there is no session behind it.

use leptos::*;

use crate::state::use_app_state;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Register,
}

impl Mode {
    fn title(self) -> &'static str {
        match self {
            Mode::Login => "Entrar",
            Mode::Register => "Criar Conta",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Entrar",
            Mode::Register => "Registrar",
        }
    }

    fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            Mode::Login => ("Ainda não tem uma conta?", "Criar conta"),
            Mode::Register => ("Já tem uma conta?", "Entrar"),
        }
    }

    fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }
}

/// First missing required field, if any
fn missing_field(mode: Mode, name: &str, email: &str, password: &str) -> Option<&'static str> {
    if mode == Mode::Register && name.trim().is_empty() {
        Some("nome")
    } else if email.trim().is_empty() {
        Some("e-mail")
    } else if password.is_empty() {
        Some("senha")
    } else {
        None
    }
}

/// Auth page component
#[component]
pub fn Auth() -> impl IntoView {
    let state = use_app_state();

    let (mode, set_mode) = create_signal(Mode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mode = mode.get_untracked();
        if let Some(field) = missing_field(
            mode,
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            state.error(format!("Preencha o campo {}.", field));
            return;
        }

        let message = format!("{} submitted for {}", mode.title(), email.get_untracked().trim());
        web_sys::console::log_1(&message.into());
        state.success(match mode {
            Mode::Login => "Login enviado.",
            Mode::Register => "Cadastro enviado.",
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh] px-4">
            <form on:submit=on_submit class="bg-white rounded-xl shadow w-full max-w-md p-8 space-y-4">
                <h1 class="text-3xl font-bold text-center">{move || mode.get().title()}</h1>

                {move || (mode.get() == Mode::Register).then(|| view! {
                    <Field label="Nome" kind="text" value=name set_value=set_name />
                })}
                <Field label="E-mail" kind="email" value=email set_value=set_email />
                <Field label="Senha" kind="password" value=password set_value=set_password />

                <button
                    type="submit"
                    class="w-full py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-semibold transition-colors"
                >
                    {move || mode.get().submit_label()}
                </button>

                <p class="text-center text-sm text-gray-600">
                    {move || mode.get().toggle_prompt().0}
                    " "
                    <button
                        type="button"
                        on:click=move |_| set_mode.update(|m| *m = m.toggled())
                        class="text-red-600 font-medium hover:underline"
                    >
                        {move || mode.get().toggle_prompt().1}
                    </button>
                </p>
            </form>
        </div>
    }
}

#[component]
fn Field(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-1">{label}</label>
            <input
                type=kind
                required=true
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_only_when_registering() {
        assert_eq!(missing_field(Mode::Login, "", "a@b.com", "x"), None);
        assert_eq!(missing_field(Mode::Register, " ", "a@b.com", "x"), Some("nome"));
        assert_eq!(missing_field(Mode::Login, "", "a@b.com", ""), Some("senha"));
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Mode::Login.toggled().toggled(), Mode::Login);
        assert_eq!(Mode::Register.toggle_prompt().1, "Entrar");
    }
}
