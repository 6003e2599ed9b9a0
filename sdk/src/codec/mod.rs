//! Wire codec for delimited market records.
//!
//! Multi-record payloads separate records with `:` and fields with `~`.
//! Both separators may be escaped with a leading backslash.

pub mod record;
pub mod tokenizer;

pub use record::{millis_to_datetime, Market, MarketRecordDecoder, RecordDecoder, MARKET_FIELD_COUNT};
pub use tokenizer::{split_on_delimiter, ESCAPE, FIELD_SEPARATOR, RECORD_SEPARATOR};
