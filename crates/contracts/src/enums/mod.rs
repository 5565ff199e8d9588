//! Перечисления справочников: типы объектов, номеров и статусы записей

/// Объявляет перечисление с отображаемым названием, списком значений и разбором из строки.
///
/// Отображаемое название совпадает с тем, что таблица показывает в бейдже статуса
/// и в выпадающем фильтре, поэтому разбор регистронезависимый.
macro_rules! display_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Человекочитаемое название
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Все значения в порядке объявления
            pub fn all() -> Vec<$name> {
                vec![$($name::$variant),+]
            }

            /// Названия всех значений (для опций фильтра)
            pub fn labels() -> Vec<String> {
                Self::all().iter().map(|v| v.as_str().to_string()).collect()
            }

            /// Разбор из названия без учёта регистра
            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::all()
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(label))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod property_type;
pub mod room_type;
pub mod status;

pub use property_type::PropertyType;
pub use room_type::RoomType;
pub use status::{BookingStatus, GuestStatus, OwnerStatus, PropertyStatus, RoomStatus};
