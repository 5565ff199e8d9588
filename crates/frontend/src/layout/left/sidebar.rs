//! Sidebar with collapsible menu groups

use crate::layout::global_context::{use_admin_context, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<Section>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "front_desk",
            label: "Front desk",
            icon: "bookings",
            items: vec![Section::Bookings, Section::Guests],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "hotel",
            items: vec![Section::Owners, Section::Properties, Section::Rooms],
        },
        MenuGroup {
            id: "pricing",
            label: "Pricing",
            icon: "seasonal-prices",
            items: vec![Section::Services, Section::SeasonalPrices],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_admin_context();

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_exp = group_id.clone();
                let gid_show = group_id.clone();
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|section| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get() == section
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open(section)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(section.icon())}
                                                <span>{section.label()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_section_once() {
        let listed: Vec<Section> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .collect();
        assert_eq!(listed.len(), Section::all().len());
        for section in Section::all() {
            assert_eq!(listed.iter().filter(|s| **s == section).count(), 1);
        }
    }
}
