use crate::domain::a005_booking::ui::details::BookingDetails;
use crate::shared::components::table::{CellValue, Column, ColumnType, DataTable, RowAction, TableRow};
use crate::shared::data::store::{remove_where, replace_where, use_store, HotelStore};
use crate::shared::list_utils::{cmp_f64, cmp_ignore_case, sort_list, Sortable};
use crate::shared::modal::confirm_action;
use chrono::NaiveDate;
use contracts::domain::a005_booking::aggregate::{Booking, BookingId};
use contracts::enums::BookingStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRow {
    pub id: BookingId,
    pub code: String,
    pub guest: String,
    pub property: String,
    pub room: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
}

impl BookingRow {
    pub fn new(b: &Booking, guest: String, property: String, room: String) -> Self {
        Self {
            id: b.base.id,
            code: b.base.code.clone(),
            guest,
            property,
            room,
            check_in: b.check_in,
            check_out: b.check_out,
            nights: b.nights(),
            guests: b.guests,
            total_amount: b.total_amount,
            status: b.status,
        }
    }

    fn resolve(b: &Booking, store: &HotelStore) -> Self {
        Self::new(
            b,
            store.guest_name(b.guest_id),
            store.property_name(b.property_id),
            store.room_number(b.room_id),
        )
    }
}

impl TableRow for BookingRow {
    fn row_key(&self) -> String {
        self.code.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "code" => self.code.as_str().into(),
            "avatar" | "guest" => self.guest.as_str().into(),
            "property" => self.property.as_str().into(),
            "room" => self.room.as_str().into(),
            "check_in" => self.check_in.into(),
            "check_out" => self.check_out.into(),
            "nights" => self.nights.into(),
            "guests" => self.guests.into(),
            "total_amount" => self.total_amount.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for BookingRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "total_amount" => cmp_f64(self.total_amount, other.total_amount),
            "guest" => cmp_ignore_case(&self.guest, &other.guest),
            "code" => self.code.cmp(&other.code),
            _ => self.check_in.cmp(&other.check_in),
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::text("code", "Booking").width("110px"),
        Column::new("avatar", "", ColumnType::Avatar).width("48px"),
        Column::text("guest", "Guest"),
        Column::text("property", "Property"),
        Column::text("room", "Room").width("100px"),
        Column::new("check_in", "Check-in", ColumnType::Date).width("120px"),
        Column::new("check_out", "Check-out", ColumnType::Date).width("120px"),
        Column::new("nights", "Nights", ColumnType::Number).width("80px"),
        Column::new("guests", "Guests", ColumnType::Number).width("80px"),
        Column::new("total_amount", "Total", ColumnType::Currency).width("110px"),
        Column::new("status", "Status", ColumnType::Status)
            .options(BookingStatus::labels())
            .width("120px"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn BookingList() -> impl IntoView {
    let store = use_store();
    let opened = RwSignal::new(None::<(BookingId, bool)>);

    // Самые поздние заезды сверху
    let rows = Signal::derive(move || {
        let mut rows: Vec<BookingRow> =
            store.bookings.with(|v| v.iter().map(|b| BookingRow::resolve(b, &store)).collect());
        sort_list(&mut rows, "check_in", false);
        rows
    });

    let on_action = Callback::new(move |(action, row): (RowAction, BookingRow)| match action {
        RowAction::Delete => {
            if confirm_action(&format!("Delete booking {} for {}?", row.code, row.guest)) {
                store.bookings.update(|v| {
                    remove_where(v, |b| b.base.id == row.id);
                });
            }
        }
        RowAction::View => opened.set(Some((row.id, false))),
        RowAction::Edit => opened.set(Some((row.id, true))),
    });

    let on_close = Callback::new(move |_| opened.set(None));
    let on_saved = Callback::new(move |updated: Booking| {
        let id = updated.base.id;
        store.bookings.update(|v| {
            replace_where(v, updated, |b| b.base.id == id);
        });
        opened.set(None);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Bookings"</h1>
                </div>
            </div>

            <DataTable
                rows=rows
                columns=columns()
                actions=vec!["view".to_string(), "edit".to_string(), "delete".to_string()]
                on_action_click=on_action
                empty_message="No bookings match the filters"
            />

            {move || opened.get().and_then(|(id, editable)| {
                let booking = store.bookings.with(|v| v.iter().find(|b| b.base.id == id).cloned())?;
                let row = BookingRow::resolve(&booking, &store);
                let room = store.rooms.with(|v| v.iter().find(|r| r.base.id == booking.room_id).cloned());
                let seasons = store.seasonal_prices.with(|v| {
                    v.iter()
                        .filter(|s| s.property_id == booking.property_id)
                        .cloned()
                        .collect::<Vec<_>>()
                });
                let services = store.services.with(|v| {
                    v.iter().filter(|s| s.is_active).cloned().collect::<Vec<_>>()
                });
                Some(view! {
                    <BookingDetails
                        booking=booking
                        guest=row.guest
                        property=row.property
                        room=room
                        seasons=seasons
                        services=services
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

    fn fixture_rows() -> Vec<BookingRow> {
        let f = fixtures::fixtures();
        f.bookings
            .iter()
            .map(|b| {
                let guest = f
                    .guests
                    .iter()
                    .find(|g| g.base.id == b.guest_id)
                    .map(|g| g.full_name.clone())
                    .unwrap_or_default();
                BookingRow::new(b, guest, String::new(), String::new())
            })
            .collect()
    }

    #[test]
    fn test_schema_is_valid() {
        assert!(validate_schema(&columns()).is_ok());
    }

    #[test]
    fn test_nights_are_derived() {
        let rows = fixture_rows();
        assert_eq!(rows[0].nights, 4);
        assert_eq!(rows[0].cell("nights"), CellValue::Number(4.0));
    }

    #[test]
    fn test_newest_check_in_first() {
        let mut rows = fixture_rows();
        sort_list(&mut rows, "check_in", false);
        assert_eq!(rows[0].check_in.to_string(), "2025-01-03");
        assert_eq!(rows.last().map(|r| r.guest.as_str()), Some("Olivia Brown"));
    }

    #[test]
    fn test_guest_filter_and_pagination() {
        let rows = fixture_rows();
        let mut state = TableState::new();
        state.set_filter("guest", "olivia");
        let visible = state.compute_visible_rows(&rows, &columns());
        assert_eq!(visible.total_filtered, 2);
        assert_eq!(visible.total_pages, 1);

        state.set_filter("guest", "nobody");
        let visible = state.compute_visible_rows(&rows, &columns());
        assert!(visible.is_empty());
        assert_eq!(visible.filler_rows, 0);
    }
}
