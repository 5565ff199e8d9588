use crate::domain::a007_seasonal_price::ui::details::SeasonalPriceDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_f64, cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use chrono::NaiveDate;
use contracts::domain::a007_seasonal_price::aggregate::{SeasonalPrice, SeasonalPriceId};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct SeasonalPriceRow {
    pub id: SeasonalPriceId,
    pub code: String,
    pub property: String,
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: f64,
}

impl SeasonalPriceRow {
    pub fn new(s: &SeasonalPrice, property: String) -> Self {
        Self {
            id: s.base.id,
            code: s.base.code.clone(),
            property,
            season_name: s.season_name.clone(),
            start_date: s.start_date,
            end_date: s.end_date,
            multiplier: s.multiplier,
        }
    }
}

impl TableRow for SeasonalPriceRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "property" => self.property.as_str().into(),
            "season_name" => self.season_name.as_str().into(),
            "start_date" => self.start_date.into(),
            "end_date" => self.end_date.into(),
            "multiplier" => self.multiplier.into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for SeasonalPriceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "multiplier" => cmp_f64(self.multiplier, other.multiplier),
            "season_name" => cmp_ignore_case(&self.season_name, &other.season_name),
            _ => self.start_date.cmp(&other.start_date),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::text("property", "Property"),
        Column::text("season_name", "Season"),
        Column::new("start_date", "From", ColumnType::Date).width("120px"),
        Column::new("end_date", "To", ColumnType::Date).width("120px"),
        Column::new("multiplier", "Multiplier", ColumnType::Number).width("110px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SeasonalPriceList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(SeasonalPriceId, bool)>);

    let rows = Signal::derive(move || {
        let mut rows: Vec<SeasonalPriceRow> = store.seasonal_prices.with(|v| {
            v.iter()
                .map(|s| SeasonalPriceRow::new(s, store.property_name(s.property_id)))
                .collect()
        });
        sort_list(&mut rows, "start_date", true);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, SeasonalPriceRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete season {} at {}?", row.season_name, row.property)) {
                store.seasonal_prices.update(|v| {
                    remove_where(v, |s| s.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: SeasonalPrice| {
        let id = updated.base.id;
        store.seasonal_prices.update(|v| {
            replace_where(v, updated, |s| s.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Seasonal prices"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
                empty_message="No seasons match the filters"
            />

            {move || opened.get().and_then(|(id, editable)| {
                let season = store.seasonal_prices.with(|v| v.iter().find(|s| s.base.id == id).cloned())?;
                let property = store.property_name(season.property_id);
                Some(view! {
                    <SeasonalPriceDetails
                        season=season
                        property=property
                        editable=editable
                        on_saved=on_saved
                        on_close=on_close
                    />
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

    fn fixture_rows() -> Vec<SeasonalPriceRow> {
        fixtures::seasonal_prices()
            .iter()
            .map(|s| SeasonalPriceRow::new(s, String::new()))
            .collect()
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_sorted_by_start_date() {
        let mut rows = fixture_rows();
        sort_list(&mut rows, "start_date", true);
        let names: Vec<&str> = rows.iter().map(|r| r.season_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Cherry blossom", "High season", "Summer peak", "Winter low", "Christmas"]
        );
    }

    #[test]
    fn test_date_columns_do_not_filter() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("start_date", "1999");
        assert_eq!(state.compute_visible_rows(&rows, &columns()).total_filtered, rows.len());
    }

    #[test]
    fn test_multiplier_filter_is_verbatim() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("multiplier", "1.");
        // 1.3, 1.5, 1.4, 1.6; 0.8 не подходит
        assert_eq!(state.compute_visible_rows(&rows, &columns()).total_filtered, 4);
    }
}
