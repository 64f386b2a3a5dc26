/// Main application component and routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::notifications::NotificationProvider;
use crate::components::shell::Shell;
use crate::pages::{
    keys::KeysPage, nodes::NodesPage, not_found::NotFoundPage, users::UsersPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/wireadmin-web.css"/>
        <Title text="WireAdmin"/>
        <Meta name="description" content="VPN fleet administration console"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <NotificationProvider>
                <Shell>
                    <Routes>
                        <Route path="/" view=NodesPage/>
                        <Route path="/nodes" view=NodesPage/>
                        <Route path="/keys" view=KeysPage/>
                        <Route path="/users" view=UsersPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </Shell>
            </NotificationProvider>
        </Router>
    }
}
