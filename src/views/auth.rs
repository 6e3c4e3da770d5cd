//! Login / register form
//!
//! Produces the submitted payload only; nothing is authenticated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Form validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthFormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// What a valid submission produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AuthPayload {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between login and register, keeping typed values
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Entrar",
            AuthMode::Register => "Criar Conta",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Entrar",
            AuthMode::Register => "Registrar",
        }
    }

    /// Prompt and link text of the mode switch
    pub fn toggle_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::Login => ("Ainda não tem uma conta?", "Criar conta"),
            AuthMode::Register => ("Já tem uma conta?", "Entrar"),
        }
    }

    /// Check required fields and build the payload
    pub fn submit(&self) -> Result<AuthPayload, AuthFormError> {
        if self.mode == AuthMode::Register && self.name.trim().is_empty() {
            return Err(AuthFormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthFormError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AuthFormError::MissingField("password"));
        }

        let email = self.email.trim().to_string();
        let password = self.password.clone();
        Ok(match self.mode {
            AuthMode::Login => AuthPayload::Login { email, password },
            AuthMode::Register => AuthPayload::Register {
                name: self.name.trim().to_string(),
                email,
                password,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_ignores_name() {
        let form = AuthForm {
            email: "ana@email.com".to_string(),
            password: "segredo".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.submit().unwrap(),
            AuthPayload::Login {
                email: "ana@email.com".to_string(),
                password: "segredo".to_string()
            }
        );
    }

    #[test]
    fn test_register_requires_name() {
        let mut form = AuthForm {
            email: "ana@email.com".to_string(),
            password: "segredo".to_string(),
            ..Default::default()
        };
        form.toggle_mode();

        assert_eq!(form.submit(), Err(AuthFormError::MissingField("name")));

        form.name = "Ana".to_string();
        let json = serde_json::to_value(form.submit().unwrap()).unwrap();
        assert_eq!(json["mode"], "register");
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn test_required_fields() {
        let mut form = AuthForm::new();
        assert_eq!(form.submit(), Err(AuthFormError::MissingField("email")));

        form.email = "a@b.c".to_string();
        assert_eq!(form.submit(), Err(AuthFormError::MissingField("password")));
    }

    #[test]
    fn test_labels_follow_mode() {
        let mut form = AuthForm::new();
        assert_eq!(form.title(), "Entrar");
        form.toggle_mode();
        assert_eq!(form.title(), "Criar Conta");
        assert_eq!(form.submit_label(), "Registrar");
        assert_eq!(form.toggle_prompt().1, "Entrar");
    }
}
