/// Status badges for table rows
///
/// Each badge renders the latest known server state for its entity; the
/// per-row signal is overwritten on the next response and is otherwise
/// stale until the next fetch or reload.

use leptos::*;

#[component]
pub fn KeyStatusBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || {
            if active.get() {
                "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-800 dark:bg-green-900/20 dark:text-green-400"
            } else {
                "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300"
            }
        }>
            {move || if active.get() { "active" } else { "inactive" }}
        </span>
    }
}

#[component]
pub fn UserStatusBadge(#[prop(into)] blocked: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || {
            if blocked.get() {
                "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-red-100 text-red-800 dark:bg-red-900/20 dark:text-red-400"
            } else {
                "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-800 dark:bg-green-900/20 dark:text-green-400"
            }
        }>
            {move || if blocked.get() { "blocked" } else { "active" }}
        </span>
    }
}

#[component]
pub fn HealthBadge(healthy: bool) -> impl IntoView {
    let class = if healthy {
        "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-800 dark:bg-green-900/20 dark:text-green-400"
    } else {
        "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-red-100 text-red-800 dark:bg-red-900/20 dark:text-red-400"
    };

    view! {
        <span class=class>
            {if healthy { "healthy" } else { "unhealthy" }}
        </span>
    }
}
