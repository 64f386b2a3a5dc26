/// Node fleet page
///
/// Fleet-wide operations (rebalance, health check) behind confirmation
/// modals, plus per-node connection tests and removal.

use leptos::*;

use crate::api::nodes::{check_all_health, delete_node, fetch_nodes, rebalance_nodes, test_node};
use crate::components::badge::HealthBadge;
use crate::components::button::LoadingButton;
use crate::components::icons::{AlertIcon, CheckIcon, CrossIcon, ServerIcon, SpinnerIcon, TrashIcon};
use crate::components::modal::Modal;
use crate::components::notifications::use_notifications;
use crate::types::Node;
use crate::utils::browser::{confirm, schedule_reload, RELOAD_DELAY_MS};
use crate::utils::time::format_relative_time;

#[component]
pub fn NodesPage() -> impl IntoView {
    let notifications = use_notifications();

    let nodes = create_resource(|| (), |_| async move { fetch_nodes().await });

    let (show_rebalance, set_show_rebalance) = create_signal(false);
    let (rebalance_busy, set_rebalance_busy) = create_signal(false);
    let (show_health, set_show_health) = create_signal(false);
    let (health_busy, set_health_busy) = create_signal(false);

    let run_rebalance = move |_: ()| {
        set_rebalance_busy.set(true);
        spawn_local(async move {
            match rebalance_nodes().await {
                Ok(response) => {
                    set_show_rebalance.set(false);
                    set_rebalance_busy.set(false);
                    if response.success {
                        notifications.show_success.call("Rebalance started".to_string());
                        schedule_reload(RELOAD_DELAY_MS);
                    } else {
                        notifications
                            .show_danger
                            .call(response.failure_text("Rebalance failed"));
                    }
                }
                Err(err) => {
                    log::error!("rebalance request failed: {}", err);
                    notifications
                        .show_danger
                        .call("Failed to start rebalance".to_string());
                    set_rebalance_busy.set(false);
                }
            }
        });
    };

    let run_health_check = move |_: ()| {
        set_health_busy.set(true);
        spawn_local(async move {
            match check_all_health().await {
                Ok(report) => {
                    set_show_health.set(false);
                    set_health_busy.set(false);
                    if report.success {
                        notifications.show_success.call(report.summary());
                        schedule_reload(RELOAD_DELAY_MS);
                    } else {
                        notifications.show_danger.call(
                            report
                                .message
                                .clone()
                                .unwrap_or_else(|| "Health check failed".to_string()),
                        );
                    }
                }
                Err(err) => {
                    log::error!("health check request failed: {}", err);
                    notifications
                        .show_danger
                        .call("Failed to start health check".to_string());
                    set_health_busy.set(false);
                }
            }
        });
    };

    // Closing a modal by any path re-enables its action button, even when
    // the triggering request never resolved.
    let close_rebalance = Callback::new(move |_| {
        set_show_rebalance.set(false);
        set_rebalance_busy.set(false);
    });
    let close_health = Callback::new(move |_| {
        set_show_health.set(false);
        set_health_busy.set(false);
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        "Nodes"
                    </h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Manage the VPN servers in your fleet"
                    </p>
                </div>

                <div class="flex space-x-3">
                    <button
                        class="inline-flex items-center px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm text-sm font-medium text-gray-700 dark:text-gray-300 bg-white dark:bg-gray-800 hover:bg-gray-50 dark:hover:bg-gray-700"
                        on:click=move |_| set_show_health.set(true)
                    >
                        "Check health"
                    </button>
                    <button
                        class="inline-flex items-center px-4 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                        on:click=move |_| set_show_rebalance.set(true)
                    >
                        "Rebalance"
                    </button>
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 overflow-hidden">
                <Suspense fallback=move || view! {
                    <div class="p-8 text-center">
                        <SpinnerIcon/>
                        <p class="mt-2 text-gray-600 dark:text-gray-400">"Loading nodes..."</p>
                    </div>
                }>
                    {move || nodes.get().map(|result| match result {
                        Ok(list) => view! { <NodesTable nodes=list/> }.into_view(),
                        Err(err) => view! {
                            <div class="p-8 text-center">
                                <AlertIcon/>
                                <p class="mt-2 text-red-600 dark:text-red-400">"Failed to load nodes"</p>
                                <p class="text-sm text-gray-500 mt-1">{err}</p>
                            </div>
                        }.into_view(),
                    })}
                </Suspense>
            </div>

            <Modal show=show_rebalance title="Rebalance nodes" on_close=close_rebalance>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    "Clients are redistributed from overloaded nodes across the fleet. \
                     Active sessions may reconnect. The page reloads once the rebalance \
                     has been started."
                </p>
                <div class="mt-4 flex justify-end">
                    <LoadingButton
                        busy=rebalance_busy
                        label="Start rebalance"
                        busy_label="Working..."
                        on_press=Callback::new(run_rebalance)
                    />
                </div>
            </Modal>

            <Modal show=show_health title="Check all nodes" on_close=close_health>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    "Runs a liveness probe against every node in the fleet and refreshes \
                     the page with the results."
                </p>
                <div class="mt-4 flex justify-end">
                    <LoadingButton
                        busy=health_busy
                        label="Start health check"
                        busy_label="Working..."
                        on_press=Callback::new(run_health_check)
                    />
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn NodesTable(nodes: Vec<Node>) -> impl IntoView {
    let is_empty = nodes.is_empty();

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Name"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Address"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Load"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Status"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Last check"
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Actions"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=move || nodes.clone()
                        key=|node| node.id
                        children=move |node| {
                            view! { <NodeRow node=node/> }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || is_empty>
                <div class="p-8 text-center">
                    <ServerIcon/>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">"No nodes registered"</p>
                </div>
            </Show>
        </div>
    }
}

/// Outcome of the per-node connection test, replacing the health badge in
/// place; terminal states persist until the next page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestState {
    Idle,
    Running,
    Passed,
    Failed,
}

#[component]
fn NodeRow(node: Node) -> impl IntoView {
    let notifications = use_notifications();
    let (test_state, set_test_state) = create_signal(TestState::Idle);

    let node_id = node.id;
    let healthy = node.healthy;

    let run_test = move |_| {
        set_test_state.set(TestState::Running);
        spawn_local(async move {
            match test_node(node_id).await {
                Ok(response) if response.success => set_test_state.set(TestState::Passed),
                Ok(_) => set_test_state.set(TestState::Failed),
                Err(err) => {
                    log::error!("connection test for node {} failed: {}", node_id, err);
                    notifications
                        .show_danger
                        .call("Connection test did not complete".to_string());
                    set_test_state.set(TestState::Failed);
                }
            }
        });
    };

    let remove = move |_| {
        if !confirm("Delete this node? Its users will be migrated to other nodes.") {
            return;
        }
        spawn_local(async move {
            match delete_node(node_id).await {
                Ok(response) if response.success => {
                    notifications.show_success.call("Node deleted".to_string());
                    schedule_reload(RELOAD_DELAY_MS);
                }
                Ok(response) => {
                    notifications
                        .show_danger
                        .call(response.failure_text("Failed to delete node"));
                }
                Err(err) => {
                    log::error!("deleting node {} failed: {}", node_id, err);
                    notifications
                        .show_danger
                        .call("Failed to delete node".to_string());
                }
            }
        });
    };

    let last_check = node
        .last_check
        .map(format_relative_time)
        .unwrap_or_else(|| "Never".to_string());

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900 dark:text-white">
                    {node.name.clone()}
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <code class="text-sm text-gray-900 dark:text-white">
                    {node.address.clone()}
                </code>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                {format!("{} / {}", node.current_users, node.max_users)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                {move || match test_state.get() {
                    TestState::Idle => view! { <HealthBadge healthy=healthy/> }.into_view(),
                    TestState::Running => view! {
                        <span class="inline-flex items-center text-sm text-gray-600 dark:text-gray-400">
                            <SpinnerIcon/>
                            <span class="ml-2">"Testing..."</span>
                        </span>
                    }.into_view(),
                    TestState::Passed => view! {
                        <span class="inline-flex items-center text-sm text-green-600 dark:text-green-400">
                            <CheckIcon/>
                            <span class="ml-2">"Connection ok"</span>
                        </span>
                    }.into_view(),
                    TestState::Failed => view! {
                        <span class="inline-flex items-center text-sm text-red-600 dark:text-red-400">
                            <CrossIcon/>
                            <span class="ml-2">"Connection failed"</span>
                        </span>
                    }.into_view(),
                }}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {last_check}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <div class="flex items-center space-x-3">
                    <button
                        class="text-blue-600 dark:text-blue-400 hover:text-blue-900 dark:hover:text-blue-300"
                        on:click=run_test
                    >
                        "Test"
                    </button>
                    <button
                        class="inline-flex items-center text-red-600 dark:text-red-400 hover:text-red-900 dark:hover:text-red-300"
                        title="Delete node"
                        on:click=remove
                    >
                        <TrashIcon/>
                    </button>
                </div>
            </td>
        </tr>
    }
}
