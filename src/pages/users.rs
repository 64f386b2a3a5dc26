/// Users page
///
/// User listing with a block/unblock toggle per row. Toast wording, badge,
/// icon, and tooltip all derive from the pre-toggle flag; nothing changes
/// on failure, so the row keeps showing the last confirmed state.

use leptos::*;

use crate::api::users::{fetch_users, toggle_user_block};
use crate::components::badge::UserStatusBadge;
use crate::components::icons::{AlertIcon, LockIcon, SpinnerIcon, UnlockIcon, UsersIcon};
use crate::components::notifications::use_notifications;
use crate::types::{block_button_title, block_transition_message, AdminUser};
use crate::utils::time::format_relative_time;

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = create_resource(|| (), |_| async move { fetch_users().await });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Users"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    "Manage access for the service's end users"
                </p>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 overflow-hidden">
                <Suspense fallback=move || view! {
                    <div class="p-8 text-center">
                        <SpinnerIcon/>
                        <p class="mt-2 text-gray-600 dark:text-gray-400">"Loading users..."</p>
                    </div>
                }>
                    {move || users.get().map(|result| match result {
                        Ok(list) => view! { <UsersTable users=list/> }.into_view(),
                        Err(err) => view! {
                            <div class="p-8 text-center">
                                <AlertIcon/>
                                <p class="mt-2 text-red-600 dark:text-red-400">"Failed to load users"</p>
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
fn UsersTable(users: Vec<AdminUser>) -> impl IntoView {
    let is_empty = users.is_empty();

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "User"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Keys"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Joined"
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
                        each=move || users.clone()
                        key=|user| user.id
                        children=move |user| {
                            view! { <UserRow user=user/> }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || is_empty>
                <div class="p-8 text-center">
                    <UsersIcon/>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">"No users yet"</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: AdminUser) -> impl IntoView {
    let notifications = use_notifications();
    let (blocked, set_blocked) = create_signal(user.is_blocked);
    let user_id = user.id;

    let toggle = move |_| {
        let was_blocked = blocked.get_untracked();
        spawn_local(async move {
            match toggle_user_block(user_id, was_blocked).await {
                Ok(()) => {
                    notifications
                        .show_success
                        .call(block_transition_message(was_blocked).to_string());
                    set_blocked.set(!was_blocked);
                }
                Err(err) => {
                    log::error!("toggling block for user {} failed: {}", user_id, err);
                    notifications
                        .show_danger
                        .call("Failed to update user status".to_string());
                }
            }
        });
    };

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900 dark:text-white">
                    {user.name.clone()}
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                {user.keys}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {format_relative_time(user.created_at)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <UserStatusBadge blocked=blocked/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <button
                    class="p-1.5 text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white rounded hover:bg-gray-100 dark:hover:bg-gray-700"
                    title=move || block_button_title(blocked.get())
                    on:click=toggle
                >
                    <Show when=move || blocked.get() fallback=|| view! { <LockIcon/> }>
                        <UnlockIcon/>
                    </Show>
                </button>
            </td>
        </tr>
    }
}
