use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use oddsarb::domain::{
    BookmakerQuote, Event, EventId, EventOdds, MarketKind, MarketQuote, Odds, OutcomeQuote,
};

pub const HOME: &str = "Boston Celtics";
pub const AWAY: &str = "Dallas Mavericks";

pub fn make_event(id: &str) -> Event {
    Event::try_new(
        EventId::from(id),
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap(),
        HOME,
        AWAY,
    )
    .unwrap()
}

pub fn outcome(name: &str, price: Decimal) -> OutcomeQuote {
    OutcomeQuote::new(name, Odds::try_new(price).unwrap())
}

pub fn h2h_market(home: Decimal, away: Decimal) -> MarketQuote {
    MarketQuote::new(
        MarketKind::HeadToHead,
        vec![outcome(HOME, home), outcome(AWAY, away)],
    )
}

pub fn totals_market(line: Decimal, over: Decimal, under: Decimal) -> MarketQuote {
    MarketQuote::new(
        MarketKind::Totals,
        vec![
            outcome("Over", over).with_point(line),
            outcome("Under", under).with_point(line),
        ],
    )
}

pub fn quote(bookmaker: &str, markets: Vec<MarketQuote>) -> BookmakerQuote {
    BookmakerQuote::try_new(bookmaker, markets).unwrap()
}

pub fn h2h_quote(bookmaker: &str, home: Decimal, away: Decimal) -> BookmakerQuote {
    quote(bookmaker, vec![h2h_market(home, away)])
}

pub fn event_odds(id: &str, quotes: Vec<BookmakerQuote>) -> EventOdds {
    EventOdds::new(make_event(id), quotes)
}
