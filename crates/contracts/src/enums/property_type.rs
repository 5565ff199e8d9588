display_enum! {
    /// Тип объекта размещения
    PropertyType {
        Hotel => "Hotel",
        Villa => "Villa",
        Apartment => "Apartment",
        Resort => "Resort",
        Hostel => "Hostel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(PropertyType::from_label("villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::from_label(" HOTEL "), Some(PropertyType::Hotel));
        assert_eq!(PropertyType::from_label("Castle"), None);
    }

    #[test]
    fn test_labels_keep_declaration_order() {
        assert_eq!(
            PropertyType::labels(),
            vec!["Hotel", "Villa", "Apartment", "Resort", "Hostel"]
        );
    }
}
