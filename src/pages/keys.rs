/// VPN keys page
///
/// Key listing with per-key deactivation. The badge update after a
/// successful deactivation is optimistic: the response body is not
/// inspected, and reconciliation happens on the next fetch or reload.

use leptos::*;

use crate::api::keys::{deactivate_key, fetch_keys};
use crate::components::badge::KeyStatusBadge;
use crate::components::icons::{AlertIcon, KeyIcon, SpinnerIcon};
use crate::components::notifications::use_notifications;
use crate::types::VpnKey;
use crate::utils::time::format_relative_time;

#[component]
pub fn KeysPage() -> impl IntoView {
    let keys = create_resource(|| (), |_| async move { fetch_keys().await });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "VPN Keys"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    "Per-user credentials issued by the fleet"
                </p>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 overflow-hidden">
                <Suspense fallback=move || view! {
                    <div class="p-8 text-center">
                        <SpinnerIcon/>
                        <p class="mt-2 text-gray-600 dark:text-gray-400">"Loading keys..."</p>
                    </div>
                }>
                    {move || keys.get().map(|result| match result {
                        Ok(list) => view! { <KeysTable keys=list/> }.into_view(),
                        Err(err) => view! {
                            <div class="p-8 text-center">
                                <AlertIcon/>
                                <p class="mt-2 text-red-600 dark:text-red-400">"Failed to load keys"</p>
                                <p class="text-sm text-gray-500 mt-1">{err}</p>
                            </div>
                        }.into_view(),
                    })}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn KeysTable(keys: Vec<VpnKey>) -> impl IntoView {
    let is_empty = keys.is_empty();

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Key"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "User"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Node"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Created"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Status"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Actions"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=move || keys.clone()
                        key=|key| key.id
                        children=move |key| {
                            view! { <KeyRow key=key/> }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || is_empty>
                <div class="p-8 text-center">
                    <KeyIcon/>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">"No keys issued"</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn KeyRow(key: VpnKey) -> impl IntoView {
    let notifications = use_notifications();
    let (active, set_active) = create_signal(key.active);
    let key_id = key.id;

    let deactivate = move |_| {
        spawn_local(async move {
            match deactivate_key(key_id).await {
                Ok(()) => {
                    notifications.show_success.call("Key deactivated".to_string());
                    set_active.set(false);
                }
                Err(err) => {
                    log::error!("deactivating key {} failed: {}", key_id, err);
                    notifications
                        .show_danger
                        .call("Failed to deactivate key".to_string());
                }
            }
        });
    };

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
            <td class="px-6 py-4 whitespace-nowrap">
                <code class="text-sm text-gray-900 dark:text-white">
                    {format!("#{}", key.id)}
                </code>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                {key.user.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {key.node.clone().unwrap_or_else(|| "unassigned".to_string())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {format_relative_time(key.created_at)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <KeyStatusBadge active=active/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <Show when=move || active.get()>
                    <button
                        class="text-red-600 dark:text-red-400 hover:text-red-900 dark:hover:text-red-300"
                        on:click=deactivate
                    >
                        "Deactivate"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
