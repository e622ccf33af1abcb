use shared_types::PanicStep;

#[cfg(feature = "desktop")]
const APP_NAME: &str = "Condomínio CH7";

/// Title/body of the local notice for a panic step, if that step warrants one.
fn panic_notice(step: PanicStep) -> Option<(&'static str, &'static str)> {
    match step {
        PanicStep::MarkSent => Some((
            "Alerta de pânico",
            "Portaria e contato de emergência notificados.",
        )),
        PanicStep::Reset => None,
    }
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "failed to show desktop notification");
        }
    }
}

/// Surface a local notice for a panic step. Nothing leaves the device.
pub fn panic_step(step: PanicStep) {
    if let Some((title, body)) = panic_notice(step) {
        send(title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_sent_step_notifies() {
        assert!(panic_notice(PanicStep::MarkSent).is_some());
        assert!(panic_notice(PanicStep::Reset).is_none());
    }

    #[test]
    fn send_noop_does_not_panic() {
        // Without the desktop feature, send() is a no-op and must not panic.
        panic_step(PanicStep::MarkSent);
    }
}
