use crate::domain::a003_room::ui::details::RoomDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store};
use crate::shared::list_utils::{cmp_f64, cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use contracts::domain::a003_room::aggregate::{Room, RoomId};
use contracts::enums::{RoomStatus, RoomType};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct RoomRow {
    pub id: RoomId,
    pub code: String,
    pub property: String,
    pub number: String,
    pub room_type: RoomType,
    pub capacity: u32,
    pub nightly_rate: f64,
    pub status: RoomStatus,
}

impl RoomRow {
    pub fn new(r: &Room, property: String) -> Self {
        Self {
            id: r.base.id,
            code: r.base.code.clone(),
            property,
            number: r.number.clone(),
            room_type: r.room_type,
            capacity: r.capacity,
            nightly_rate: r.nightly_rate,
            status: r.status,
        }
    }
}

impl TableRow for RoomRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "property" => self.property.as_str().into(),
            "number" => self.number.as_str().into(),
            "room_type" => self.room_type.as_str().into(),
            "capacity" => self.capacity.into(),
            "nightly_rate" => self.nightly_rate.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for RoomRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "capacity" => self.capacity.cmp(&other.capacity),
            "nightly_rate" => cmp_f64(self.nightly_rate, other.nightly_rate),
            "number" => cmp_ignore_case(&self.number, &other.number),
            // объект, затем номер
            _ => cmp_ignore_case(&self.property, &other.property)
                .then_with(|| cmp_ignore_case(&self.number, &other.number)),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::text("property", "Property"),
        Column::text("number", "Room").width("110px"),
        Column::new("room_type", "Type", ColumnType::Select)
            .options(RoomType::labels())
            .width("130px"),
        Column::new("capacity", "Capacity", ColumnType::Number).width("100px"),
        Column::new("nightly_rate", "Nightly rate", ColumnType::Currency).width("120px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(RoomStatus::labels())
            .width("120px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(RoomId, bool)>);

    let rows = Signal::derive(move || {
        let mut rows: Vec<RoomRow> = store.rooms.with(|v| {
            v.iter()
                .map(|r| RoomRow::new(r, store.property_name(r.property_id)))
                .collect()
        });
        sort_list(&mut rows, "property", true);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, RoomRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete room {} at {}?", row.number, row.property)) {
                store.rooms.update(|v| {
                    remove_where(v, |r| r.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Room| {
        let id = updated.base.id;
        store.rooms.update(|v| {
            replace_where(v, updated, |r| r.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Rooms"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
                empty_message="No rooms match the filters"
            />

            {move || opened.get().and_then(|(id, editable)| {
                let room = store.rooms.with(|v| v.iter().find(|r| r.base.id == id).cloned())?;
                let property = store.property_name(room.property_id);
                Some(view! {
                    <RoomDetails
                        room=room
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

    fn fixture_rows() -> Vec<RoomRow> {
        let f = fixtures::fixtures();
        f.rooms
            .iter()
            .map(|r| {
                let property = f
                    .properties
                    .iter()
                    .find(|p| p.base.id == r.property_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                RoomRow::new(r, property)
            })
            .collect()
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_sorted_by_property_then_number() {
        let mut rows = fixture_rows();
        sort_list(&mut rows, "property", true);
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.property.as_str(), r.number.as_str()))
            .collect();
        assert_eq!(keys[0], ("Camden Backpackers", "Dorm A"));
        assert_eq!(keys[1], ("Grand Hotel", "101"));
        assert_eq!(keys[2], ("Grand Hotel", "204"));
        assert_eq!(keys[3], ("Grand Hotel", "501"));
    }

    #[test]
    fn test_select_filter_by_room_type() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("room_type", "Suite");
        let visible = state.compute_visible_rows(&rows, &columns());
        assert_eq!(visible.total_filtered, 2);
        // 2 строки на первой странице из 10
        assert_eq!(visible.filler_rows, 8);
    }

    #[test]
    fn test_status_column_never_filters() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("status", "Occupied");
        assert_eq!(state.compute_visible_rows(&rows, &columns()).total_filtered, rows.len());
    }
}
