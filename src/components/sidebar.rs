/// Sidebar navigation between the console sections.

use leptos::*;
use leptos_router::*;

use crate::components::icons::{KeyIcon, ServerIcon, UsersIcon};

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden lg:block w-64 bg-gray-50 dark:bg-gray-900 border-r border-gray-200 dark:border-gray-800">
            <nav class="px-4 py-6 space-y-1">
                <NavLink href="/nodes" label="Nodes">
                    <ServerIcon/>
                </NavLink>
                <NavLink href="/keys" label="VPN Keys">
                    <KeyIcon/>
                </NavLink>
                <NavLink href="/users" label="Users">
                    <UsersIcon/>
                </NavLink>
            </nav>
        </aside>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center space-x-3 px-3 py-2 rounded-md text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 aria-[current]:bg-gray-100 dark:aria-[current]:bg-gray-800 aria-[current]:text-gray-900 dark:aria-[current]:text-white"
        >
            {children()}
            <span>{label}</span>
        </A>
    }
}
