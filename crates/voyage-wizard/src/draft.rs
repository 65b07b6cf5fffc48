//! The accumulated itinerary draft and its bounded inputs.

use crate::WizardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use voyage_core::DestinationName;

/// Trip length choices, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TripDuration {
    Three,
    Five,
    Seven,
    Ten,
    Fourteen,
}

impl TripDuration {
    pub const ALL: [TripDuration; 5] = [
        TripDuration::Three,
        TripDuration::Five,
        TripDuration::Seven,
        TripDuration::Ten,
        TripDuration::Fourteen,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
            Self::Ten => 10,
            Self::Fourteen => 14,
        }
    }

    /// "7 days"
    pub fn label(&self) -> String {
        format!("{} days", self.days())
    }
}

impl TryFrom<u32> for TripDuration {
    type Error = WizardError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.days() == days)
            .ok_or_else(|| WizardError::InvalidChoice(format!("{} is not an offered duration", days)))
    }
}

impl From<TripDuration> for u32 {
    fn from(duration: TripDuration) -> Self {
        duration.days()
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelerType {
    pub const ALL: [TravelerType; 4] = [
        TravelerType::Solo,
        TravelerType::Couple,
        TravelerType::Family,
        TravelerType::Friends,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Friends => "friends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solo => "Solo Traveler",
            Self::Couple => "Couple",
            Self::Family => "Family",
            Self::Friends => "Group of Friends",
        }
    }
}

impl FromStr for TravelerType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| WizardError::InvalidChoice(format!("unknown traveler type: {}", s)))
    }
}

impl fmt::Display for TravelerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One of the three room counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomField {
    Count,
    Adults,
    Children,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Increment,
    Decrement,
}

pub const MIN_ROOMS: u32 = 1;
pub const MIN_ADULTS: u8 = 1;
pub const MAX_ADULTS: u8 = 4;
pub const MIN_CHILDREN: u8 = 0;
pub const MAX_CHILDREN: u8 = 4;

/// Room composition. Counters clamp at their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOptions {
    count: u32,
    adults_per_room: u8,
    children_per_room: u8,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            count: 1,
            adults_per_room: 2,
            children_per_room: 0,
        }
    }
}

impl RoomOptions {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn adults_per_room(&self) -> u8 {
        self.adults_per_room
    }

    pub fn children_per_room(&self) -> u8 {
        self.children_per_room
    }

    /// Apply one step to a counter and return its new value
    pub fn adjust(&mut self, field: RoomField, adjustment: Adjustment) -> u32 {
        match (field, adjustment) {
            (RoomField::Count, Adjustment::Increment) => {
                self.count = self.count.saturating_add(1);
            }
            (RoomField::Count, Adjustment::Decrement) => {
                self.count = self.count.saturating_sub(1).max(MIN_ROOMS);
            }
            (RoomField::Adults, Adjustment::Increment) => {
                self.adults_per_room = (self.adults_per_room + 1).min(MAX_ADULTS);
            }
            (RoomField::Adults, Adjustment::Decrement) => {
                self.adults_per_room = self.adults_per_room.saturating_sub(1).max(MIN_ADULTS);
            }
            (RoomField::Children, Adjustment::Increment) => {
                self.children_per_room = (self.children_per_room + 1).min(MAX_CHILDREN);
            }
            (RoomField::Children, Adjustment::Decrement) => {
                self.children_per_room = self.children_per_room.saturating_sub(1).max(MIN_CHILDREN);
            }
        }
        self.get(field)
    }

    pub fn get(&self, field: RoomField) -> u32 {
        match field {
            RoomField::Count => self.count,
            RoomField::Adults => self.adults_per_room as u32,
            RoomField::Children => self.children_per_room as u32,
        }
    }

    /// "1 room(s), 2 adult(s), 0 children"
    pub fn describe(&self) -> String {
        format!(
            "{} room(s), {} adult(s), {} children",
            self.count, self.adults_per_room, self.children_per_room
        )
    }
}

/// In-progress trip preferences for one wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDraft {
    pub destination: DestinationName,
    pub duration: Option<TripDuration>,
    pub traveler_type: Option<TravelerType>,
    pub rooms: RoomOptions,
}

impl ItineraryDraft {
    pub fn new(destination: DestinationName) -> Self {
        Self {
            destination,
            duration: None,
            traveler_type: None,
            rooms: RoomOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_choices() {
        assert_eq!(TripDuration::try_from(7).unwrap(), TripDuration::Seven);
        assert_eq!(TripDuration::Seven.to_string(), "7");
        assert_eq!(TripDuration::Fourteen.label(), "14 days");
        assert!(TripDuration::try_from(4).is_err());
    }

    #[test]
    fn test_duration_serde_as_number() {
        let json = serde_json::to_string(&TripDuration::Ten).unwrap();
        assert_eq!(json, "10");
        let back: TripDuration = serde_json::from_str("5").unwrap();
        assert_eq!(back, TripDuration::Five);
        assert!(serde_json::from_str::<TripDuration>("6").is_err());
    }

    #[test]
    fn test_traveler_parse() {
        assert_eq!("family".parse::<TravelerType>().unwrap(), TravelerType::Family);
        assert_eq!(TravelerType::Friends.label(), "Group of Friends");
        assert!("crowd".parse::<TravelerType>().is_err());
    }

    #[test]
    fn test_room_defaults() {
        let rooms = RoomOptions::default();
        assert_eq!((rooms.count(), rooms.adults_per_room(), rooms.children_per_room()), (1, 2, 0));
        assert_eq!(rooms.describe(), "1 room(s), 2 adult(s), 0 children");
    }

    #[test]
    fn test_room_clamping() {
        let mut rooms = RoomOptions::default();
        assert_eq!(rooms.adjust(RoomField::Count, Adjustment::Decrement), 1);
        for _ in 0..10 {
            rooms.adjust(RoomField::Adults, Adjustment::Increment);
            rooms.adjust(RoomField::Children, Adjustment::Increment);
        }
        assert_eq!(rooms.adults_per_room(), 4);
        assert_eq!(rooms.children_per_room(), 4);
        for _ in 0..10 {
            rooms.adjust(RoomField::Adults, Adjustment::Decrement);
            rooms.adjust(RoomField::Children, Adjustment::Decrement);
        }
        assert_eq!(rooms.adults_per_room(), 1);
        assert_eq!(rooms.children_per_room(), 0);
    }

    #[test]
    fn test_draft_wire_shape() {
        let draft = ItineraryDraft::new(DestinationName::new("Japan"));
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["destination"], "Japan");
        assert!(value["duration"].is_null());
        assert_eq!(value["rooms"]["adultsPerRoom"], 2);
    }
}
