use crate::domain::a002_property::ui::details::PropertyDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_f64, cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use contracts::domain::a002_property::aggregate::{Property, PropertyId};
use contracts::enums::{PropertyStatus, PropertyType};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRow {
    pub id: PropertyId,
    pub code: String,
    pub name: String,
    pub location: String,
    pub property_type: PropertyType,
    pub owner: String,
    pub rating: f64,
    pub base_rate: f64,
    pub status: PropertyStatus,
}

impl PropertyRow {
    pub fn new(p: &Property, owner: String) -> Self {
        Self {
            id: p.base.id,
            code: p.base.code.clone(),
            name: p.name.clone(),
            location: format!("{}, {}", p.city, p.country),
            property_type: p.property_type,
            owner,
            rating: p.rating,
            base_rate: p.base_rate,
            status: p.status,
        }
    }
}

impl TableRow for PropertyRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "location" => self.location.as_str().into(),
            "property_type" => self.property_type.as_str().into(),
            "owner" => self.owner.as_str().into(),
            "rating" => self.rating.into(),
            "base_rate" => self.base_rate.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for PropertyRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "rating" => cmp_f64(self.rating, other.rating),
            "base_rate" => cmp_f64(self.base_rate, other.base_rate),
            "location" => cmp_ignore_case(&self.location, &other.location),
            _ => cmp_ignore_case(&self.name, &other.name),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::text("code", "Code").width("100px"),
        Column::text("name", "Property"),
        Column::text("location", "Location"),
        Column::new("property_type", "Type", ColumnType::Select)
            .options(PropertyType::labels())
            .width("130px"),
        Column::text("owner", "Owner"),
        Column::new("rating", "Rating", ColumnType::Rating).width("140px"),
        Column::new("base_rate", "Base rate", ColumnType::Currency).width("110px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(PropertyStatus::labels())
            .width("120px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PropertyList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(PropertyId, bool)>);

    // Лучшие объекты сверху
    let rows = Signal::derive(move || {
        let mut rows: Vec<PropertyRow> = store.properties.with(|v| {
            v.iter()
                .map(|p| PropertyRow::new(p, store.owner_name(p.owner_id)))
                .collect()
        });
        sort_list(&mut rows, "rating", false);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, PropertyRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete property {}?", row.name)) {
                store.properties.update(|v| {
                    remove_where(v, |p| p.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Property| {
        let id = updated.base.id;
        store.properties.update(|v| {
            replace_where(v, updated, |p| p.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Properties"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
                empty_message="No properties match the filters"
            />

            {move || opened.get().and_then(|(id, editable)| {
                let property = store.properties.with(|v| v.iter().find(|p| p.base.id == id).cloned())?;
                let owner = store.owner_name(property.owner_id);
                Some(view! {
                    <PropertyDetails
                        property=property
                        owner=owner
                        editable=editable
                        on_saved=on_saved
                        on_close=on_close
                    />
                })
            })}
        </div>
    }
}
