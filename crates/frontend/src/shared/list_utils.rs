//! Сортировка списков перед передачей в таблицу.
//!
//! Таблица сохраняет порядок строк, поэтому страницы сортируют коллекции сами.

use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Сравнение строк без учёта регистра
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сравнение f64 с NaN в конце
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        price: f64,
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => cmp_f64(self.price, other.price),
                _ => cmp_ignore_case(self.name, other.name),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "villa", price: 500.0 },
            Item { name: "Apartment", price: 120.0 },
            Item { name: "hostel", price: f64::NAN },
        ]
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut v = items();
        sort_list(&mut v, "name", true);
        let names: Vec<_> = v.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Apartment", "hostel", "villa"]);
    }

    #[test]
    fn test_sort_descending_with_nan_last_when_ascending() {
        let mut v = items();
        sort_list(&mut v, "price", true);
        assert_eq!(v[0].name, "Apartment");
        assert_eq!(v[2].name, "hostel");

        sort_list(&mut v, "price", false);
        assert_eq!(v[0].name, "hostel");
        assert_eq!(v[1].name, "villa");
    }
}
