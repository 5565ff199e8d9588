use leptos::prelude::*;

fn svg16(body: AnyView) -> AnyView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}

fn svg20(body: AnyView) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        // Sections
        "bookings" => svg20(view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
            <path d="m9 16 2 2 4-4"/>
        }.into_any()),
        "guests" | "owners" => svg20(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "properties" => svg20(view! {
            <path d="M3 22h18"/>
            <path d="M6 22V8l6-5 6 5v14"/>
            <rect x="9" y="13" width="6" height="9"/>
        }.into_any()),
        "rooms" => svg20(view! {
            <path d="M2 20v-8a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v8"/>
            <path d="M4 10V6a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2v4"/>
            <path d="M12 4v6"/>
            <path d="M2 18h20"/>
        }.into_any()),
        "services" => svg20(view! {
            <path d="M3 11h18"/>
            <path d="M5 11a7 7 0 0 1 14 0"/>
            <path d="M12 4V2"/>
            <path d="M2 15h20"/>
        }.into_any()),
        "seasonal-prices" => svg20(view! {
            <path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/>
            <circle cx="7" cy="7" r="1"/>
        }.into_any()),
        // Row actions
        "eye" => svg16(view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any()),
        "edit" => svg16(view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }.into_any()),
        "delete" => svg16(view! {
            <path d="M3 6h18"/>
            <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
            <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
        }.into_any()),
        // Controls
        "x" => svg16(view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }.into_any()),
        "save" => svg16(view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <path d="M17 21v-8H7v8"/>
            <path d="M7 3v5h8"/>
        }.into_any()),
        "refresh" => svg16(view! {
            <path d="M23 4v6h-6"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }.into_any()),
        "chevron-left" => svg16(view! { <polyline points="15 18 9 12 15 6"/> }.into_any()),
        "chevron-right" => svg16(view! { <polyline points="9 18 15 12 9 6"/> }.into_any()),
        "chevrons-left" => svg16(view! {
            <polyline points="11 17 6 12 11 7"/>
            <polyline points="18 17 13 12 18 7"/>
        }.into_any()),
        "chevrons-right" => svg16(view! {
            <polyline points="13 17 18 12 13 7"/>
            <polyline points="6 17 11 12 6 7"/>
        }.into_any()),
        // Layout
        "panel-left-close" => svg20(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m16 15-3-3 3-3"/>
        }.into_any()),
        "panel-left-open" => svg20(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m14 9 3 3-3 3"/>
        }.into_any()),
        "hotel" => svg20(view! {
            <path d="M18 22V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v18"/>
            <path d="M2 22h20"/>
            <path d="M10 6h4"/>
            <path d="M10 10h4"/>
            <path d="M10 14h4"/>
            <path d="M10 22v-4h4v4"/>
        }.into_any()),
        _ => svg20(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }.into_any()),
    }
}
