//! Статусы записей. Названия совпадают со словарём бейджей таблицы.

display_enum! {
    /// Статус владельца
    OwnerStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

display_enum! {
    /// Статус объекта размещения
    PropertyStatus {
        Active => "Active",
        Inactive => "Inactive",
        Maintenance => "Maintenance",
    }
}

display_enum! {
    /// Статус номера
    RoomStatus {
        Available => "Available",
        Occupied => "Occupied",
        Maintenance => "Maintenance",
    }
}

display_enum! {
    /// Статус гостя
    GuestStatus {
        Active => "Active",
        Blocked => "Blocked",
    }
}

display_enum! {
    /// Статус бронирования
    BookingStatus {
        Pending => "Pending",
        Confirmed => "Confirmed",
        CheckedIn => "Checked-in",
        CheckedOut => "Checked-out",
        Cancelled => "Cancelled",
    }
}

impl BookingStatus {
    /// Бронь ещё занимает номер
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::CheckedIn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_labels() {
        assert_eq!(BookingStatus::CheckedIn.as_str(), "Checked-in");
        assert_eq!(
            BookingStatus::from_label("checked-out"),
            Some(BookingStatus::CheckedOut)
        );
    }

    #[test]
    fn test_booking_status_is_open() {
        assert!(BookingStatus::Pending.is_open());
        assert!(!BookingStatus::Cancelled.is_open());
        assert!(!BookingStatus::CheckedOut.is_open());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(RoomStatus::Maintenance.to_string(), "Maintenance");
        assert_eq!(GuestStatus::Blocked.to_string(), "Blocked");
    }
}
