//! Поля форм редактирования и разбор введённых значений.

use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::{Input, Label};

/// Text field bound to a string signal
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input value=value placeholder=placeholder />
        </div>
    }
}

/// Date field with the native date picker; the signal holds `yyyy-mm-dd`
#[component]
pub fn DateField(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Native select over a fixed list of labels
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <select
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|o| {
                        let selected = o.clone();
                        let text = o.clone();
                        view! {
                            <option value=o selected=move || value.get() == selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Checkbox bound to a bool signal
#[component]
pub fn CheckField(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="form__group form__group--inline">
            <label class="form__label">
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                />
                " "
                {label}
            </label>
        </div>
    }
}

pub fn parse_number(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("{}: '{}' is not a number", label, raw.trim()))
}

pub fn parse_count(label: &str, raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{}: '{}' is not a whole number", label, raw.trim()))
}

pub fn parse_date(label: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{}: '{}' is not a date (yyyy-mm-dd)", label, raw.trim()))
}

/// Значение даты для поля формы
pub fn date_to_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("Price", " 1,234.5 "), Ok(1234.5));
        assert_eq!(
            parse_number("Price", "abc"),
            Err("Price: 'abc' is not a number".to_string())
        );
        assert!(parse_number("Price", "inf").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("Guests", "3"), Ok(3));
        assert!(parse_count("Guests", "-1").is_err());
        assert!(parse_count("Guests", "2.5").is_err());
    }

    #[test]
    fn test_parse_date_round_trip() {
        let d = parse_date("Check-in", "2024-07-10").unwrap();
        assert_eq!(date_to_input(d), "2024-07-10");
        assert!(parse_date("Check-in", "10.07.2024").is_err());
    }
}
