/// Shell component wrapping the overall page layout.

use leptos::*;

use crate::components::{footer::Footer, header::Header, sidebar::Sidebar};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col">
            <Header/>

            <div class="flex flex-1">
                <Sidebar/>

                <main class="flex-1 overflow-hidden">
                    <div class="h-full overflow-y-auto">
                        <div class="container mx-auto px-4 py-6 max-w-7xl">
                            {children()}
                        </div>
                    </div>
                </main>
            </div>

            <Footer/>
        </div>
    }
}
