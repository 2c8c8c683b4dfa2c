//! Pickup booking for building managers.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::calendar::CalendarMonth;

/// Address filled in by the simulated QR tag scan.
pub const QR_TAG_ADDRESS: &str = "Keangnam Landmark, Tầng Hầm B2, Khu C";
/// Bookings shown in the upcoming list.
pub const UPCOMING_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupType {
    #[default]
    Battery,
    Ewaste,
    Bulky,
    Hazardous,
}

impl PickupType {
    pub fn all() -> &'static [PickupType] {
        &[
            PickupType::Battery,
            PickupType::Ewaste,
            PickupType::Bulky,
            PickupType::Hazardous,
        ]
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PickupType::Battery => "battery",
            PickupType::Ewaste => "e_waste",
            PickupType::Bulky => "bulky_waste",
            PickupType::Hazardous => "hazardous",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Kg,
    Tons,
}

impl VolumeUnit {
    pub fn kg_factor(self) -> f64 {
        match self {
            VolumeUnit::Kg => 1.0,
            VolumeUnit::Tons => 1000.0,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            VolumeUnit::Kg => "kg",
            VolumeUnit::Tons => "tons",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BookingError {
    MissingDate,
    EmptyVolume,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::MissingDate => write!(f, "no pickup date selected"),
            BookingError::EmptyVolume => write!(f, "estimated amount is empty"),
        }
    }
}

impl std::error::Error for BookingError {}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub kind: PickupType,
    pub volume: String,
    pub unit: VolumeUnit,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub date: String,
    pub kind: PickupType,
    pub volume: f64,
    pub unit: VolumeUnit,
    pub location: String,
    pub notes: String,
}

impl Booking {
    pub fn volume_kg(&self) -> f64 {
        self.volume * self.unit.kg_factor()
    }
}

/// Unparsable or non-finite input counts as 0.
pub fn parse_volume(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Calendar position, selection, QR state and submitted bookings.
#[derive(Resource, Debug, Clone)]
pub struct PickupSchedule {
    pub calendar: CalendarMonth,
    pub selected_date: Option<String>,
    pub qr_location: Option<String>,
    pub bookings: Vec<Booking>,
    /// Set after a successful submit until the user starts another.
    pub submitted: bool,
}

impl Default for PickupSchedule {
    fn default() -> Self {
        Self::starting_at(CalendarMonth::containing(crate::now_millis()))
    }
}

impl PickupSchedule {
    pub fn starting_at(calendar: CalendarMonth) -> Self {
        Self {
            calendar,
            selected_date: None,
            qr_location: None,
            bookings: Vec::new(),
            submitted: false,
        }
    }

    pub fn prev_month(&mut self) {
        self.calendar = self.calendar.prev();
    }

    pub fn next_month(&mut self) {
        self.calendar = self.calendar.next();
    }

    pub fn select_day(&mut self, day: u32) {
        if (1..=self.calendar.days()).contains(&day) {
            self.selected_date = Some(self.calendar.key(day));
        }
    }

    pub fn scan_qr_tag(&mut self) -> &'static str {
        self.qr_location = Some(QR_TAG_ADDRESS.to_string());
        QR_TAG_ADDRESS
    }

    pub fn clear_qr(&mut self) {
        self.qr_location = None;
    }

    /// Validate and store a booking for the selected date.
    pub fn submit(&mut self, form: &BookingForm) -> Result<(), BookingError> {
        let date = self
            .selected_date
            .clone()
            .ok_or(BookingError::MissingDate)?;
        if form.volume.trim().is_empty() {
            return Err(BookingError::EmptyVolume);
        }
        self.bookings.push(Booking {
            date,
            kind: form.kind,
            volume: parse_volume(&form.volume),
            unit: form.unit,
            location: form.location.clone(),
            notes: form.notes.clone(),
        });
        self.submitted = true;
        Ok(())
    }

    pub fn start_another(&mut self) {
        self.submitted = false;
    }

    pub fn bookings_on(&self, date: &str) -> usize {
        self.bookings.iter().filter(|b| b.date == date).count()
    }

    /// Most recent bookings, newest first.
    pub fn upcoming(&self) -> Vec<&Booking> {
        self.bookings.iter().rev().take(UPCOMING_LIMIT).collect()
    }

    pub fn projected_waste_kg(&self) -> f64 {
        self.bookings.iter().map(Booking::volume_kg).sum()
    }
}
