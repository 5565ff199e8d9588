use super::view_model::{quote_for, BookingDetailsViewModel};
use crate::shared::components::form_fields::{DateField, SelectField, TextField};
use crate::shared::components::table::format::format_currency;
use crate::shared::modal::DetailsModal;
use contracts::domain::a003_room::aggregate::Room;
use contracts::domain::a005_booking::aggregate::Booking;
use contracts::domain::a006_service::aggregate::Service;
use contracts::domain::a007_seasonal_price::aggregate::SeasonalPrice;
use contracts::enums::BookingStatus;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn BookingDetails(
    booking: Booking,
    guest: String,
    property: String,
    room: Option<Room>,
    /// Сезоны объекта брони
    seasons: Vec<SeasonalPrice>,
    /// Активные услуги, доступные для расчёта
    services: Vec<Service>,
    editable: bool,
    on_saved: Callback<Booking>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = BookingDetailsViewModel::new(&booking);
    let title = format!("{} · {}", booking.base.code, guest);
    let can_cancel = editable && booking.status.is_open();
    let room_label = room
        .as_ref()
        .map(|r| format!("{} · Room {} ({})", property, r.number, r.room_type))
        .unwrap_or_else(|| property.clone());

    let original = StoredValue::new(booking);
    let room = StoredValue::new(room);
    let seasons = StoredValue::new(seasons);
    let services = StoredValue::new(services);

    let quote = Memo::new(move |_| {
        let check_in = vm.check_in.get();
        let check_out = vm.check_out.get();
        let chosen = vm.extras.get();
        let extras: Vec<Service> = services.with_value(|all| {
            all.iter()
                .filter(|s| chosen.contains(&s.base.id))
                .cloned()
                .collect()
        });
        room.with_value(|r| {
            seasons.with_value(|ss| quote_for(&check_in, &check_out, r.as_ref(), ss, &extras))
        })
    });

    let on_save = Callback::new(move |_| {
        original.with_value(|b| room.with_value(|r| vm.save_command(b, r.as_ref(), on_saved)))
    });
    let on_cancel_booking = move |_| original.with_value(|b| vm.cancel_command(b, on_saved));
    let apply_quote = move |_| {
        if let Ok(q) = quote.get_untracked() {
            vm.total_amount.set(format!("{:.2}", q.total));
        }
    };

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <p class="details-form__hint">{room_label}</p>
            <DateField label="Check-in" value=vm.check_in />
            <DateField label="Check-out" value=vm.check_out />
            <TextField label="Guests" value=vm.guests />
            <TextField label="Total" value=vm.total_amount />
            <SelectField label="Status" value=vm.status options=BookingStatus::labels() />

            <div class="booking-quote">
                <h3 class="booking-quote__title">"Stay quote"</h3>
                <div class="booking-quote__extras">
                    {services.get_value().into_iter().map(|s| {
                        let id = s.base.id;
                        let label = if s.per_night {
                            format!("{} ({} / night)", s.name, format_currency(s.price))
                        } else {
                            format!("{} ({})", s.name, format_currency(s.price))
                        };
                        view! {
                            <label class="form__label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.extras.with(|ids| ids.contains(&id))
                                    on:change=move |ev| vm.toggle_extra(id, event_target_checked(&ev))
                                />
                                " "
                                {label}
                            </label>
                        }
                    }).collect_view()}
                </div>
                {move || match quote.get() {
                    Ok(q) => view! {
                        <table class="booking-quote__table">
                            <tr><td>"Nights"</td><td>{q.nights}</td></tr>
                            <tr><td>"Room"</td><td>{format_currency(q.room_total)}</td></tr>
                            <tr><td>"Extras"</td><td>{format_currency(q.services_total)}</td></tr>
                            <tr class="booking-quote__total"><td>"Total"</td><td>{format_currency(q.total)}</td></tr>
                        </table>
                    }.into_any(),
                    Err(e) => view! { <div class="booking-quote__error">{e}</div> }.into_any(),
                }}
                {editable.then(|| view! {
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=apply_quote>
                        "Use quote as total"
                    </Button>
                })}
            </div>

            {can_cancel.then(|| view! {
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel_booking>
                    "Cancel booking"
                </Button>
            })}
        </DetailsModal>
    }
}
