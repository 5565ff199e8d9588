use crate::domain::a004_guest::ui::details::GuestDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use contracts::domain::a004_guest::aggregate::{Guest, GuestId};
use contracts::enums::GuestStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct GuestRow {
    pub id: GuestId,
    pub code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub total_stays: u32,
    pub status: GuestStatus,
}

impl From<&Guest> for GuestRow {
    fn from(g: &Guest) -> Self {
        Self {
            id: g.base.id,
            code: g.base.code.clone(),
            full_name: g.full_name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
            country: g.country.clone(),
            total_stays: g.total_stays,
            status: g.status,
        }
    }
}

impl TableRow for GuestRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "avatar" => self.full_name.as_str().into(),
            "full_name" => self.full_name.as_str().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "country" => self.country.as_str().into(),
            "total_stays" => self.total_stays.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for GuestRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "total_stays" => self.total_stays.cmp(&other.total_stays),
            "country" => cmp_ignore_case(&self.country, &other.country),
            _ => cmp_ignore_case(&self.full_name, &other.full_name),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("avatar", "", ColumnType::Avatar).width("48px"),
        Column::text("full_name", "Guest"),
        Column::text("email", "Email"),
        Column::text("phone", "Phone").width("160px"),
        Column::text("country", "Country"),
        Column::new("total_stays", "Stays", ColumnType::Number).width("90px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(GuestStatus::labels())
            .width("110px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn GuestList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(GuestId, bool)>);

    let rows = Signal::derive(move || {
        let mut rows: Vec<GuestRow> = store.guests.with(|v| v.iter().map(GuestRow::from).collect());
        sort_list(&mut rows, "full_name", true);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, GuestRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete guest {}?", row.full_name)) {
                store.guests.update(|v| {
                    remove_where(v, |g| g.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Guest| {
        let id = updated.base.id;
        store.guests.update(|v| {
            replace_where(v, updated, |g| g.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Guests"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
                empty_message="No guests match the filters"
            />

            {move || opened.get().and_then(|(id, editable)| {
                let guest = store.guests.with(|v| v.iter().find(|g| g.base.id == id).cloned())?;
                Some(view! {
                    <GuestDetails guest=guest editable=editable on_saved=on_saved on_close=on_close />
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

    fn fixture_rows() -> Vec<GuestRow> {
        fixtures::guests().iter().map(GuestRow::from).collect()
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_filter_by_country_ignores_case() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("country", "JAPAN");
        let visible = state.compute_visible_rows(&rows, &columns());
        assert_eq!(visible.total_filtered, 1);
        assert_eq!(visible.rows[0].full_name, "Hiro Sato");
    }

    #[test]
    fn test_sorted_by_name() {
        let mut rows = fixture_rows();
        sort_list(&mut rows, "full_name", true);
        assert_eq!(rows[0].full_name, "Emma Schneider");
        assert_eq!(rows.last().map(|r| r.full_name.as_str()), Some("Sofia Rossi"));
    }
}
