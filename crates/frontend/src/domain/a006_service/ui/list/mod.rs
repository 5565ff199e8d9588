use crate::domain::a006_service::ui::details::ServiceDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_f64, cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use contracts::domain::a006_service::aggregate::{Service, ServiceId};
use leptos::prelude::*;
use std::cmp::Ordering;

pub const BILLING_PER_NIGHT: &str = "Per night";
pub const BILLING_PER_STAY: &str = "Per stay";

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub per_night: bool,
    pub is_active: bool,
}

impl From<&Service> for ServiceRow {
    fn from(s: &Service) -> Self {
        Self {
            id: s.base.id,
            code: s.base.code.clone(),
            name: s.name.clone(),
            category: s.category.clone(),
            price: s.price,
            per_night: s.per_night,
            is_active: s.is_active,
        }
    }
}

impl TableRow for ServiceRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "price" => self.price.into(),
            "billing" => CellValue::from(if self.per_night { BILLING_PER_NIGHT } else { BILLING_PER_STAY }),
            "status" => CellValue::from(if self.is_active { "Active" } else { "Inactive" }),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for ServiceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "price" => cmp_f64(self.price, other.price),
            "category" => cmp_ignore_case(&self.category, &other.category)
                .then_with(|| cmp_ignore_case(&self.name, &other.name)),
            _ => cmp_ignore_case(&self.name, &other.name),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::text("name", "Service"),
        Column::text("category", "Category"),
        Column::new("price", "Price", ColumnType::Currency).width("100px"),
        Column::new("billing", "Billing", ColumnType::Select)
            .options([BILLING_PER_NIGHT, BILLING_PER_STAY])
            .width("130px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(["Active", "Inactive"])
            .width("110px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(ServiceId, bool)>);

    let rows = Signal::derive(move || {
        let mut rows: Vec<ServiceRow> = store.services.with(|v| v.iter().map(ServiceRow::from).collect());
        sort_list(&mut rows, "category", true);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, ServiceRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete service {}?", row.name)) {
                store.services.update(|v| {
                    remove_where(v, |s| s.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Service| {
        let id = updated.base.id;
        store.services.update(|v| {
            replace_where(v, updated, |s| s.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Services"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
            />

            {move || opened.get().and_then(|(id, editable)| {
                let service = store.services.with(|v| v.iter().find(|s| s.base.id == id).cloned())?;
                Some(view! {
                    <ServiceDetails service=service editable=editable on_saved=on_saved on_close=on_close />
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

    fn fixture_rows() -> Vec<ServiceRow> {
        fixtures::services().iter().map(ServiceRow::from).collect()
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_billing_select_filter() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("billing", BILLING_PER_NIGHT);
        let visible = state.compute_visible_rows(&rows, &columns());
        let names: Vec<&str> = visible.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Breakfast buffet", "Parking"]);
    }

    #[test]
    fn test_inactive_service_status_cell() {
        let rows = fixture_rows();
        let parking = rows.iter().find(|r| r.name == "Parking").unwrap();
        assert_eq!(parking.cell("status"), CellValue::Text("Inactive".into()));
        assert_eq!(parking.cell("unknown"), CellValue::Empty);
    }
}
