/// Specialties offered in the search filter, including ones with no specialist on the roster yet.
pub const SPECIALTIES: [&str; 10] = [
    "Cardiología",
    "Dermatología",
    "Neurología",
    "Pediatría",
    "Traumatología",
    "Oftalmología",
    "Medicina General",
    "Ginecología",
    "Psiquiatría",
    "Urología",
];

/// Times a patient can pick when booking. Offered, not enforced.
pub const BOOKING_TIME_SLOTS: [&str; 8] = [
    "08:00", "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots_are_sorted_and_unique() {
        let mut sorted = BOOKING_TIME_SLOTS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, BOOKING_TIME_SLOTS.to_vec());
    }

    #[test]
    fn test_specialties_unique() {
        let mut all = SPECIALTIES.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), SPECIALTIES.len());
    }
}
