//! Market record decoding.
//!
//! A market record is one `~`-separated line of the market listing payload.
//! Fields are positional:
//!
//! | index | field              | conversion                 |
//! |-------|--------------------|----------------------------|
//! | 0     | marketId           | integer                    |
//! | 1     | name               | text                       |
//! | 2     | marketType         | text                       |
//! | 3     | marketStatus       | text                       |
//! | 4     | marketTime         | epoch milliseconds         |
//! | 5     | menuPath           | text                       |
//! | 6     | eventHierarchy     | text                       |
//! | 7     | betDelay           | text, left unparsed        |
//! | 8     | exchangeId         | integer                    |
//! | 9     | countryISO3        | text                       |
//! | 10    | lastRefresh        | epoch milliseconds         |
//! | 11    | numberOfRunners    | integer                    |
//! | 12    | numberOfWinners    | integer                    |
//! | 13    | totalAmountMatched | decimal                    |
//! | 14    | bspMarket          | `Y` is true, else false    |
//! | 15    | turningInPlay      | `Y` is true, else false    |
//!
//! Text fields keep any escape sequences exactly as they appear on the wire.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tokenizer::{split_on_delimiter, FIELD_SEPARATOR};
use crate::error::RecordDecodeError;

/// Number of positional fields a market record must carry.
pub const MARKET_FIELD_COUNT: usize = 16;

/// Wire literal for a true flag.
const FLAG_TRUE: &str = "Y";

/// Converts milliseconds since 1970-01-01T00:00:00Z to a UTC timestamp.
///
/// Returns `None` if the result is outside the supported calendar range.
#[must_use]
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Decodes one record string into a typed value.
///
/// The gateway is generic over this trait so a listing can be decoded into
/// any representation, and so tests can observe the records it is handed.
pub trait RecordDecoder {
    /// Decoded type.
    type Output;

    /// Decodes a single record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is structurally invalid.
    fn decode(&self, record: &str) -> Result<Self::Output, RecordDecodeError>;
}

/// Decodes market listing records into [`Market`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketRecordDecoder;

impl RecordDecoder for MarketRecordDecoder {
    type Output = Market;

    fn decode(&self, record: &str) -> Result<Market, RecordDecodeError> {
        Market::from_record(record)
    }
}

/// A market as listed in the market listing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market identifier.
    pub market_id: i64,

    /// Market name.
    pub name: String,

    /// Market type code.
    pub market_type: String,

    /// Market status.
    pub market_status: String,

    /// Scheduled start.
    pub market_time: DateTime<Utc>,

    /// Menu path, e.g. `\Football\Cup\Final`.
    pub menu_path: String,

    /// Event id hierarchy.
    pub event_hierarchy: String,

    /// Bet delay, kept as the raw wire text.
    pub bet_delay: String,

    /// Exchange identifier.
    pub exchange_id: i64,

    /// Country code.
    #[serde(rename = "countryISO3")]
    pub country_iso3: String,

    /// Time the market data was last refreshed.
    pub last_refresh: DateTime<Utc>,

    /// Number of selections.
    pub number_of_runners: u32,

    /// Number of winning selections.
    pub number_of_winners: u32,

    /// Total matched volume.
    pub total_amount_matched: Decimal,

    /// Whether starting-price betting is offered.
    pub bsp_market: bool,

    /// Whether the market turns in play.
    pub turning_in_play: bool,
}

impl Market {
    /// Decodes a `~`-separated market record.
    ///
    /// Fields beyond the sixteenth are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if fields are missing or a numeric field does not
    /// parse.
    pub fn from_record(record: &str) -> Result<Self, RecordDecodeError> {
        let fields = split_on_delimiter(FIELD_SEPARATOR, record);
        if fields.len() < MARKET_FIELD_COUNT {
            return Err(RecordDecodeError::MissingField {
                index: fields.len(),
                found: fields.len(),
            });
        }

        let fields = Fields(&fields);
        Ok(Self {
            market_id: fields.integer(0, "marketId")?,
            name: fields.text(1)?,
            market_type: fields.text(2)?,
            market_status: fields.text(3)?,
            market_time: fields.timestamp(4, "marketTime")?,
            menu_path: fields.text(5)?,
            event_hierarchy: fields.text(6)?,
            bet_delay: fields.text(7)?,
            exchange_id: fields.integer(8, "exchangeId")?,
            country_iso3: fields.text(9)?,
            last_refresh: fields.timestamp(10, "lastRefresh")?,
            number_of_runners: fields.integer(11, "numberOfRunners")?,
            number_of_winners: fields.integer(12, "numberOfWinners")?,
            total_amount_matched: fields.decimal(13, "totalAmountMatched")?,
            bsp_market: fields.flag(14)?,
            turning_in_play: fields.flag(15)?,
        })
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Market: {}", self.name)
    }
}

/// Positional access to a tokenized record.
struct Fields<'a>(&'a [String]);

impl Fields<'_> {
    fn raw(&self, index: usize) -> Result<&str, RecordDecodeError> {
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or(RecordDecodeError::MissingField {
                index,
                found: self.0.len(),
            })
    }

    fn text(&self, index: usize) -> Result<String, RecordDecodeError> {
        self.raw(index).map(str::to_string)
    }

    fn integer<T: FromStr>(&self, index: usize, field: &'static str) -> Result<T, RecordDecodeError> {
        let raw = self.raw(index)?;
        raw.trim()
            .parse()
            .map_err(|_| RecordDecodeError::InvalidInteger {
                field,
                value: raw.to_string(),
            })
    }

    fn decimal(&self, index: usize, field: &'static str) -> Result<Decimal, RecordDecodeError> {
        let raw = self.raw(index)?;
        let trimmed = raw.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| RecordDecodeError::InvalidDecimal {
                field,
                value: raw.to_string(),
            })
    }

    fn timestamp(
        &self,
        index: usize,
        field: &'static str,
    ) -> Result<DateTime<Utc>, RecordDecodeError> {
        let millis: i64 = self.integer(index, field)?;
        millis_to_datetime(millis).ok_or(RecordDecodeError::InvalidTimestamp {
            field,
            value: millis,
        })
    }

    fn flag(&self, index: usize) -> Result<bool, RecordDecodeError> {
        self.raw(index).map(|raw| raw == FLAG_TRUE)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const SAMPLE: &str = "12~\
        Market \\~ name~\
        Type~\
        Status~\
        31536000000~\
        \\Menu\\Path\\To\\Market~\
        event hierarchy~\
        bet delay~\
        12345~\
        country code~\
        94608000000~\
        55~\
        2~\
        1.234556~\
        N~\
        Y";

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn test_millis_to_datetime() {
        assert_eq!(millis_to_datetime(0), Some(utc(1970, 1, 1, 0)));
        assert_eq!(millis_to_datetime(3_600_000), Some(utc(1970, 1, 1, 1)));
        assert_eq!(millis_to_datetime(3_600_000 * 24), Some(utc(1970, 1, 2, 0)));
        assert_eq!(
            millis_to_datetime(3_600_000 * 24 * 365),
            Some(utc(1971, 1, 1, 0))
        );
        // Two leap days (1972, 1976) inside the span.
        assert_eq!(
            millis_to_datetime(3_600_000 * 24 * 365 * 10),
            Some(utc(1979, 12, 30, 0))
        );
    }

    #[test]
    fn test_millis_to_datetime_before_epoch() {
        assert_eq!(millis_to_datetime(-3_600_000 * 24), Some(utc(1969, 12, 31, 0)));
    }

    #[test]
    fn test_millis_to_datetime_out_of_range() {
        assert!(millis_to_datetime(i64::MAX).is_none());
    }

    #[test]
    fn test_market_from_record() {
        let market = Market::from_record(SAMPLE).expect("decode");

        assert_eq!(market.market_id, 12);
        assert_eq!(market.name, "Market \\~ name");
        assert_eq!(market.market_type, "Type");
        assert_eq!(market.market_status, "Status");
        assert_eq!(market.market_time, utc(1971, 1, 1, 0));
        assert_eq!(market.menu_path, "\\Menu\\Path\\To\\Market");
        assert_eq!(market.event_hierarchy, "event hierarchy");
        assert_eq!(market.bet_delay, "bet delay");
        assert_eq!(market.exchange_id, 12345);
        assert_eq!(market.country_iso3, "country code");
        assert_eq!(market.last_refresh, utc(1972, 12, 31, 0));
        assert_eq!(market.number_of_runners, 55);
        assert_eq!(market.number_of_winners, 2);
        assert_eq!(
            market.total_amount_matched,
            Decimal::from_str("1.234556").expect("decimal")
        );
        assert!(!market.bsp_market);
        assert!(market.turning_in_play);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let decoder = MarketRecordDecoder;
        let first = decoder.decode(SAMPLE).expect("decode");
        let second = decoder.decode(SAMPLE).expect("decode");
        assert_eq!(first, second);
    }

    #[test]
    fn test_market_display() {
        let market = Market::from_record(SAMPLE).expect("decode");
        assert_eq!(market.to_string(), "Market: Market \\~ name");
    }

    #[test]
    fn test_too_few_fields() {
        let err = Market::from_record("12~name~Type").expect_err("should fail");
        assert_eq!(err, RecordDecodeError::MissingField { index: 3, found: 3 });
    }

    #[test]
    fn test_fifteen_fields_is_not_enough() {
        let record = SAMPLE.rsplit_once('~').map(|(head, _)| head).expect("split");
        let err = Market::from_record(record).expect_err("should fail");
        assert_eq!(err, RecordDecodeError::MissingField { index: 15, found: 15 });
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = format!("{}~extra~more", SAMPLE);
        let market = Market::from_record(&record).expect("decode");
        assert!(market.turning_in_play);
    }

    #[test]
    fn test_invalid_integer() {
        let record = SAMPLE.replacen("12~", "twelve~", 1);
        let err = Market::from_record(&record).expect_err("should fail");
        assert_eq!(
            err,
            RecordDecodeError::InvalidInteger {
                field: "marketId",
                value: "twelve".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_decimal() {
        let record = SAMPLE.replace("1.234556", "lots");
        let err = Market::from_record(&record).expect_err("should fail");
        assert!(matches!(
            err,
            RecordDecodeError::InvalidDecimal { field: "totalAmountMatched", .. }
        ));
    }

    #[test]
    fn test_invalid_timestamp_text() {
        let record = SAMPLE.replace("31536000000", "soon");
        let err = Market::from_record(&record).expect_err("should fail");
        assert!(matches!(
            err,
            RecordDecodeError::InvalidInteger { field: "marketTime", .. }
        ));
    }

    #[test]
    fn test_flags_only_accept_literal_y() {
        for (raw, expected) in [("Y", true), ("y", false), ("", false), ("YES", false)] {
            let record = SAMPLE.replace("~N~Y", &format!("~{}~Y", raw));
            let market = Market::from_record(&record).expect("decode");
            assert_eq!(market.bsp_market, expected, "flag {:?}", raw);
        }
    }

    #[test]
    fn test_scientific_decimal() {
        let record = SAMPLE.replace("1.234556", "1.5e3");
        let market = Market::from_record(&record).expect("decode");
        assert_eq!(market.total_amount_matched, Decimal::from(1500));
    }
}
