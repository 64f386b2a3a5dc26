/// Browser-side helpers: delayed reload and confirmation prompts.

use gloo_timers::callback::Timeout;

/// Delay before the full page reload that follows a successful fleet
/// operation, giving the toast time to be seen.
pub const RELOAD_DELAY_MS: u32 = 1_500;

/// Schedule exactly one full page reload after `delay_ms`.
pub fn schedule_reload(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    })
    .forget();
}

/// Native confirmation prompt. Returns false outside a browser context.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_delay_sits_in_the_agreed_window() {
        assert!((1_500..=2_000).contains(&RELOAD_DELAY_MS));
    }
}
