/// Primary action button with a derived busy state
///
/// Label and disabled attribute derive from the `busy` signal, so the
/// button restores itself wherever the signal is reset (completion,
/// failure, or the enclosing modal closing) and can never keep a stale
/// loading label.

use leptos::*;

use crate::components::icons::SpinnerIcon;

#[component]
pub fn LoadingButton(
    #[prop(into)] busy: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="inline-flex items-center px-4 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-60 disabled:cursor-not-allowed"
            disabled=move || busy.get()
            on:click=move |_| {
                if !busy.get_untracked() {
                    on_press.call(());
                }
            }
        >
            <Show
                when=move || busy.get()
                fallback=move || view! { {label} }
            >
                <SpinnerIcon/>
                <span class="ml-2">{busy_label}</span>
            </Show>
        </button>
    }
}
