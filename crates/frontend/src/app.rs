use crate::layout::center::ActiveSection;
use crate::layout::global_context::AdminContext;
use crate::layout::left::Sidebar;
use crate::layout::AdminShell;
use crate::shared::data::HotelStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AdminContext store to the whole app via context.
    let ctx = AdminContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    // Collections shared by all sections
    provide_context(HotelStore::new());

    view! {
        <AdminShell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActiveSection /> }.into_any()
        />
    }
}
