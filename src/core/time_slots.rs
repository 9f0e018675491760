//! Time-slot code table: numeric period codes → hour ranges

/// Label for codes outside the table
pub const UNKNOWN_SLOT: &str = "Unknown";

/// Hour ranges for codes 1..=9, in code order
const SLOT_LABELS: [&str; 9] = [
    "8-9", "9-10", "10-11", "11-12", "12-1", "1-2", "2-3", "3-4", "4-5",
];

/// Display label for one slot code
pub fn time_slot_label(code: u32) -> &'static str {
    match code {
        1..=9 => SLOT_LABELS[(code - 1) as usize],
        _ => UNKNOWN_SLOT,
    }
}

/// Translate codes one-for-one, keeping order and duplicates
pub fn translate_time_slots(codes: &[u32]) -> Vec<String> {
    codes
        .iter()
        .map(|&code| time_slot_label(code).to_string())
        .collect()
}
