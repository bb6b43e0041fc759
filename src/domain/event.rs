//! Sporting events and the quotes collected for them.

use chrono::{DateTime, Utc};

use super::error::DomainError;
use super::ids::EventId;
use super::quote::BookmakerQuote;

/// A scheduled fixture between two teams.
///
/// Team names are the keys used to recognise head-to-head outcomes, so they
/// are stored exactly as the odds provider spells them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    sport: Option<String>,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
}

impl Event {
    /// Create an event, rejecting empty team names.
    pub fn try_new(
        id: EventId,
        commence_time: DateTime<Utc>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let home_team = home_team.into();
        let away_team = away_team.into();

        if home_team.is_empty() {
            return Err(DomainError::EmptyTeamName { side: "home" });
        }
        if away_team.is_empty() {
            return Err(DomainError::EmptyTeamName { side: "away" });
        }

        Ok(Self {
            id,
            sport: None,
            commence_time,
            home_team,
            away_team,
        })
    }

    /// Attach the provider's sport key (e.g. `basketball_nba`).
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn sport(&self) -> Option<&str> {
        self.sport.as_deref()
    }

    pub fn commence_time(&self) -> DateTime<Utc> {
        self.commence_time
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }
}

/// One event together with every bookmaker quote received for it.
///
/// Quote order is ingestion order and decides best-price ties.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOdds {
    event: Event,
    quotes: Vec<BookmakerQuote>,
}

impl EventOdds {
    pub fn new(event: Event, quotes: Vec<BookmakerQuote>) -> Self {
        Self { event, quotes }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn quotes(&self) -> &[BookmakerQuote] {
        &self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tip_off() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap()
    }

    #[test]
    fn try_new_keeps_team_names_verbatim() {
        let event = Event::try_new(
            EventId::from("evt-1"),
            tip_off(),
            "Boston Celtics",
            "Dallas Mavericks",
        )
        .unwrap();

        assert_eq!(event.home_team(), "Boston Celtics");
        assert_eq!(event.away_team(), "Dallas Mavericks");
        assert_eq!(event.commence_time(), tip_off());
        assert_eq!(event.sport(), None);
    }

    #[test]
    fn try_new_rejects_empty_home_team() {
        let result = Event::try_new(EventId::from("evt-1"), tip_off(), "", "Dallas Mavericks");
        assert_eq!(result, Err(DomainError::EmptyTeamName { side: "home" }));
    }

    #[test]
    fn try_new_rejects_empty_away_team() {
        let result = Event::try_new(EventId::from("evt-1"), tip_off(), "Boston Celtics", "");
        assert_eq!(result, Err(DomainError::EmptyTeamName { side: "away" }));
    }

    #[test]
    fn with_sport_sets_sport_key() {
        let event = Event::try_new(EventId::from("evt-1"), tip_off(), "A", "B")
            .unwrap()
            .with_sport("basketball_nba");
        assert_eq!(event.sport(), Some("basketball_nba"));
    }
}
