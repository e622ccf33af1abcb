use crate::navigation::Screen;

/// In-progress contents of the login form.
///
/// Field values are never checked against anything: submitting always
/// succeeds and lands on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginDraft {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    /// Consume the draft and return the screen to navigate to.
    pub fn submit(self) -> Screen {
        Screen::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_masked_by_default() {
        let draft = LoginDraft::default();
        assert!(!draft.show_password);
        assert_eq!(draft.password_input_type(), "password");
    }

    #[test]
    fn toggle_flips_masking_once_per_press() {
        let mut draft = LoginDraft::default();
        draft.toggle_password_visibility();
        assert_eq!(draft.password_input_type(), "text");
        draft.toggle_password_visibility();
        assert_eq!(draft.password_input_type(), "password");
        assert_eq!(draft, LoginDraft::default());
    }

    #[test]
    fn submit_ignores_field_values() {
        let empty = LoginDraft::default();
        assert_eq!(empty.submit(), Screen::Dashboard);

        let filled = LoginDraft {
            email: "not-an-email".into(),
            password: "x".into(),
            show_password: true,
        };
        assert_eq!(filled.submit(), Screen::Dashboard);
    }
}
