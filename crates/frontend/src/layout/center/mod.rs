use crate::domain::a001_owner::ui::list::OwnerList;
use crate::domain::a002_property::ui::list::PropertyList;
use crate::domain::a003_room::ui::list::RoomList;
use crate::domain::a004_guest::ui::list::GuestList;
use crate::domain::a005_booking::ui::list::BookingList;
use crate::domain::a006_service::ui::list::ServiceList;
use crate::domain::a007_seasonal_price::ui::list::SeasonalPriceList;
use crate::layout::global_context::{use_admin_context, Section};
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Страница активного раздела
pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Bookings => view! { <BookingList /> }.into_any(),
        Section::Guests => view! { <GuestList /> }.into_any(),
        Section::Owners => view! { <OwnerList /> }.into_any(),
        Section::Properties => view! { <PropertyList /> }.into_any(),
        Section::Rooms => view! { <RoomList /> }.into_any(),
        Section::Services => view! { <ServiceList /> }.into_any(),
        Section::SeasonalPrices => view! { <SeasonalPriceList /> }.into_any(),
    }
}

#[component]
pub fn ActiveSection() -> impl IntoView {
    let ctx = use_admin_context();
    move || render_section(ctx.active.get())
}
