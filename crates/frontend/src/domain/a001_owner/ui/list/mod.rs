use crate::domain::a001_owner::ui::details::OwnerDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use contracts::domain::a001_owner::aggregate::{Owner, OwnerId};
use contracts::domain::a002_property::aggregate::Property;
use contracts::enums::OwnerStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct OwnerRow {
    pub id: OwnerId,
    pub code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub properties_count: u32,
    pub status: OwnerStatus,
}

impl OwnerRow {
    /// Счётчик объектов берётся из текущего списка объектов, а не из записи владельца
    pub fn new(o: &Owner, properties: &[Property]) -> Self {
        Self {
            id: o.base.id,
            code: o.base.code.clone(),
            full_name: o.full_name.clone(),
            email: o.email.clone(),
            phone: o.phone.clone(),
            company: o.company.clone(),
            properties_count: properties.iter().filter(|p| p.owner_id == o.base.id).count() as u32,
            status: o.status,
        }
    }
}

impl TableRow for OwnerRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "avatar" | "full_name" => self.full_name.as_str().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "company" => self.company.clone().into(),
            "properties_count" => self.properties_count.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for OwnerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "properties_count" => self.properties_count.cmp(&other.properties_count),
            _ => cmp_ignore_case(&self.full_name, &other.full_name),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("avatar", "", ColumnType::Avatar).width("48px"),
        Column::text("full_name", "Owner"),
        Column::text("email", "Email"),
        Column::text("phone", "Phone").width("160px"),
        Column::text("company", "Company"),
        Column::new("properties_count", "Properties", ColumnType::Number).width("110px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(OwnerStatus::labels())
            .width("110px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn OwnerList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(OwnerId, bool)>);

    let rows = Signal::derive(move || {
        let mut rows: Vec<OwnerRow> = store.properties.with(|props| {
            store.owners.with(|v| v.iter().map(|o| OwnerRow::new(o, props)).collect())
        });
        sort_list(&mut rows, "full_name", true);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, OwnerRow)| match action {
        RowAction::Delete => {
            let message = if row.properties_count > 0 {
                format!(
                    "Delete owner {}? {} properties still reference this owner.",
                    row.full_name, row.properties_count
                )
            } else {
                format!("Delete owner {}?", row.full_name)
            };
            if confirm_action(&message) {
                store.owners.update(|v| {
                    remove_where(v, |o| o.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Owner| {
        let id = updated.base.id;
        store.owners.update(|v| {
            replace_where(v, updated, |o| o.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Owners"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
            />

            {move || opened.get().and_then(|(id, editable)| {
                let owner = store.owners.with(|v| v.iter().find(|o| o.base.id == id).cloned())?;
                Some(view! {
                    <OwnerDetails owner=owner editable=editable on_saved=on_saved on_close=on_close />
                })
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::column::validate_schema;
    use crate::shared::components::table::state::TableState;
    use contracts::fixtures;

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_properties_count_follows_property_list() {
        let f = fixtures::fixtures();
        let pierre = &f.owners[3];
        assert_eq!(OwnerRow::new(pierre, &f.properties).properties_count, 2);

        let remaining: Vec<Property> = f
            .properties
            .iter()
            .filter(|p| p.name != "Grand Hotel")
            .cloned()
            .collect();
        assert_eq!(OwnerRow::new(pierre, &remaining).properties_count, 1);
    }

    #[test]
    fn test_missing_company_is_empty_cell() {
        let f = fixtures::fixtures();
        let james = OwnerRow::new(&f.owners[1], &f.properties);
        assert_eq!(james.cell("company"), CellValue::Empty);
    }

    #[test]
    fn test_number_filter_matches_substring() {
        let f = fixtures::fixtures();
        let rows: Vec<OwnerRow> = f.owners.iter().map(|o| OwnerRow::new(o, &f.properties)).collect();
        let mut state = TableState::new();
        state.set_filter("properties_count", "2");
        let visible = state.compute_visible_rows(&rows, &columns());
        assert_eq!(visible.total_filtered, 2);
    }
}
