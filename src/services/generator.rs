//! Id, color and date generation for new ledger entries
//!
//! The store never reaches for randomness or the clock directly; it asks a
//! [`Generator`]. Production uses [`SystemGenerator`], tests use
//! [`SequentialGenerator`] for reproducible ids and dates.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Source of fresh ids, display colors and the current date
pub trait Generator {
    /// A fresh id. Successive calls must eventually yield distinct values.
    fn next_id(&mut self) -> String;

    /// A display color as `#rrggbb`
    fn next_color(&mut self) -> String;

    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

/// Random v4 UUID ids, random colors and the local calendar date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGenerator;

impl Generator for SystemGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn next_color(&mut self) -> String {
        let bytes = Uuid::new_v4().into_bytes();
        format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

const PALETTE: [&str; 6] = [
    "#3B82F6", "#EF4444", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6",
];

/// Deterministic generator: ids "1", "2", ..., a fixed color cycle and a
/// fixed date
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    counter: u64,
    date: NaiveDate,
}

impl SequentialGenerator {
    pub fn new(date: NaiveDate) -> Self {
        Self { counter: 0, date }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default())
    }
}

impl Generator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        self.counter.to_string()
    }

    fn next_color(&mut self) -> String {
        PALETTE[(self.counter as usize) % PALETTE.len()].to_string()
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_ids_are_unique() {
        let mut generator = SystemGenerator;
        assert_ne!(generator.next_id(), generator.next_id());
    }

    #[test]
    fn test_system_color_format() {
        let color = SystemGenerator.next_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sequential_generator() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut generator = SequentialGenerator::new(date);

        assert_eq!(generator.next_id(), "1");
        assert_eq!(generator.next_id(), "2");
        assert_eq!(generator.today(), date);
        assert!(PALETTE.contains(&generator.next_color().as_str()));
    }
}
