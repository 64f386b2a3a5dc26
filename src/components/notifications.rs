/// Toast notification system
///
/// Context-provided store of transient, severity-colored banners. Toasts
/// stack in insertion order, auto-dismiss after five seconds, and can be
/// dismissed manually; removal is idempotent so the timer and the close
/// button never conflict.

use leptos::*;
use uuid::Uuid;

use crate::components::icons::{AlertIcon, CheckIcon, CloseIcon};
use crate::types::{Notification, Severity};

/// Lifetime of a toast before it removes itself.
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub notifications: ReadSignal<Vec<Notification>>,
    pub show_success: Callback<String>,
    pub show_danger: Callback<String>,
    pub dismiss: Callback<Uuid>,
}

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let (notifications, set_notifications) = create_signal::<Vec<Notification>>(Vec::new());

    let push = move |severity: Severity, message: String| {
        let id = Uuid::new_v4();
        set_notifications.update(|items| {
            items.push(Notification {
                id,
                severity,
                message,
            })
        });

        gloo_timers::callback::Timeout::new(NOTIFICATION_TTL_MS, move || {
            set_notifications.update(|items| items.retain(|n| n.id != id));
        })
        .forget();
    };

    let context = NotificationContext {
        notifications,
        show_success: Callback::new(move |message| push(Severity::Success, message)),
        show_danger: Callback::new(move |message| push(Severity::Danger, message)),
        dismiss: Callback::new(move |id| {
            set_notifications.update(|items| items.retain(|n| n.id != id));
        }),
    };

    provide_context(context);

    view! {
        {children()}
        <NotificationContainer/>
    }
}

/// Hook to access the notification context.
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .expect("NotificationContext must be provided by NotificationProvider")
}

#[component]
fn NotificationContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 max-w-sm">
            <For
                each=move || notifications.notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    view! { <NotificationToast notification=notification /> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let notifications = use_notifications();

    let (container_class, text_class, icon) = match notification.severity {
        Severity::Success => (
            "bg-green-50 border-green-200 dark:bg-green-900/20 dark:border-green-800",
            "text-green-800 dark:text-green-400",
            view! { <CheckIcon/> }.into_view(),
        ),
        Severity::Danger => (
            "bg-red-50 border-red-200 dark:bg-red-900/20 dark:border-red-800",
            "text-red-800 dark:text-red-400",
            view! { <AlertIcon/> }.into_view(),
        ),
    };

    let id = notification.id;

    view! {
        <div
            role="alert"
            class=format!("rounded-lg border p-4 shadow-lg transition-all duration-300 {}", container_class)
        >
            <div class="flex items-start">
                <div class=format!("flex-shrink-0 w-5 h-5 {}", text_class)>
                    {icon}
                </div>
                <div class=format!("ml-3 flex-1 text-sm {}", text_class)>
                    {notification.message.clone()}
                </div>
                <div class="ml-4 flex-shrink-0">
                    <button
                        class=format!("inline-flex rounded-md p-1.5 hover:bg-opacity-20 focus:outline-none {}", text_class)
                        on:click=move |_| notifications.dismiss.call(id)
                    >
                        <span class="sr-only">"Dismiss"</span>
                        <CloseIcon/>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_live_for_five_seconds() {
        assert_eq!(NOTIFICATION_TTL_MS, 5_000);
    }
}
