/// Application footer with version info.

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800 py-4">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between text-sm text-gray-600 dark:text-gray-400">
                    <div>
                        {format!("WireAdmin v{}", env!("CARGO_PKG_VERSION"))}
                    </div>
                    <div>
                        "All fleet operations run server-side; this console only triggers them."
                    </div>
                </div>
            </div>
        </footer>
    }
}
