display_enum! {
    /// Категория номера
    RoomType {
        Standard => "Standard",
        Deluxe => "Deluxe",
        Suite => "Suite",
        Family => "Family",
        Dormitory => "Dormitory",
    }
}
