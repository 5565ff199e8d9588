pub mod a001_owner;
pub mod a002_property;
pub mod a003_room;
pub mod a004_guest;
pub mod a005_booking;
pub mod a006_service;
pub mod a007_seasonal_price;
pub mod common;

/// Простая проверка email, достаточная для форм администратора
pub(crate) fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("anna@example.com"));
        assert!(!is_plausible_email("anna.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("anna@example."));
    }
}
