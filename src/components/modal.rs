/// Modal dialog component
///
/// `Show`-gated overlay closable through the close control, a backdrop
/// click, or the Escape key. Every close path funnels into the single
/// `on_close` callback, which hosting pages use to reset busy action
/// buttons so a control can never stay stuck "loading" after dismissal.

use leptos::*;

use crate::components::icons::CloseIcon;

#[component]
pub fn Modal(
    #[prop(into)] show: Signal<bool>,
    title: &'static str,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if show.get_untracked() && ev.key() == "Escape" {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-40 overflow-y-auto">
                <div class="flex items-center justify-center min-h-screen p-4">
                    <div
                        class="fixed inset-0 bg-black bg-opacity-50 transition-opacity"
                        on:click=move |_| on_close.call(())
                    ></div>

                    <div class="relative bg-white dark:bg-gray-800 rounded-lg shadow-xl max-w-lg w-full">
                        <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                {title}
                            </h2>
                            <button
                                on:click=move |_| on_close.call(())
                                class="p-2 text-gray-400 hover:text-gray-600 dark:hover:text-gray-300 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                            >
                                <span class="sr-only">"Close"</span>
                                <CloseIcon/>
                            </button>
                        </div>

                        <div class="px-6 py-4">
                            {children()}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
