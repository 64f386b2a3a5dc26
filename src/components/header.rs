/// Application header with branding.

use leptos::*;

use crate::components::icons::ShieldIcon;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white dark:bg-gray-950 border-b border-gray-200 dark:border-gray-800 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-2">
                        <ShieldIcon/>
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">
                            "WireAdmin"
                        </h1>
                    </div>

                    <div class="hidden md:block text-sm text-gray-600 dark:text-gray-400">
                        "VPN fleet administration"
                    </div>
                </div>
            </div>
        </header>
    }
}
