use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Раздел консоли администратора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Bookings,
    Guests,
    Owners,
    Properties,
    Rooms,
    Services,
    SeasonalPrices,
}

impl Section {
    pub fn all() -> [Section; 7] {
        [
            Section::Bookings,
            Section::Guests,
            Section::Owners,
            Section::Properties,
            Section::Rooms,
            Section::Services,
            Section::SeasonalPrices,
        ]
    }

    /// Key used in the `?section=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Section::Bookings => "a005_booking",
            Section::Guests => "a004_guest",
            Section::Owners => "a001_owner",
            Section::Properties => "a002_property",
            Section::Rooms => "a003_room",
            Section::Services => "a006_service",
            Section::SeasonalPrices => "a007_seasonal_price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Bookings => "Bookings",
            Section::Guests => "Guests",
            Section::Owners => "Owners",
            Section::Properties => "Properties",
            Section::Rooms => "Rooms",
            Section::Services => "Services",
            Section::SeasonalPrices => "Seasonal prices",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Bookings => "bookings",
            Section::Guests => "guests",
            Section::Owners => "owners",
            Section::Properties => "properties",
            Section::Rooms => "rooms",
            Section::Services => "services",
            Section::SeasonalPrices => "seasonal-prices",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::all().into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AdminContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AdminContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Bookings),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, section: Section) {
        log::debug!("open section '{}'", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Синхронизация активного раздела с `?section=` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.active.set(section);
        } else if !search.is_empty() {
            log::warn!("unknown section in query '{}'", search);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = section_query(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AdminContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_context() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext not found")
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SectionQuery {
    #[serde(default)]
    section: Option<String>,
}

fn section_from_query(search: &str) -> Option<Section> {
    let query: SectionQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.section.as_deref().and_then(Section::from_key)
}

fn section_query(section: Section) -> String {
    let query = serde_qs::to_string(&SectionQuery {
        section: Some(section.key().to_string()),
    })
    .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("a999_unknown"), None);
    }

    #[test]
    fn test_section_query() {
        assert_eq!(section_query(Section::Rooms), "?section=a003_room");
        assert_eq!(section_from_query("?section=a004_guest"), Some(Section::Guests));
        assert_eq!(section_from_query("section=a001_owner"), Some(Section::Owners));
        assert_eq!(section_from_query(""), None);
        assert_eq!(section_from_query("?section=nope"), None);
    }
}
