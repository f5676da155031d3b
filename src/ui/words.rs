//! Word tables for hours and minutes

use heapless::String;

/// Capacity of a single rendered word, enough for "TWENTY SEVEN".
pub const WORD_LEN: usize = 16;

/// A word as it appears on screen
pub type Word = String<WORD_LEN>;

/// Hour names on a 12 hour dial, index 0 is twelve o'clock.
pub const HOURS: [&str; 12] = [
    "Twelve", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven",
];

/// Minute names, indexed by minute of the hour.
pub const MINUTES: [&str; 60] = [
    "O'Clock",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
    "Twenty",
    "Twenty One",
    "Twenty Two",
    "Twenty Three",
    "Twenty Four",
    "Twenty Five",
    "Twenty Six",
    "Twenty Seven",
    "Twenty Eight",
    "Twenty Nine",
    "Thirty",
    "Thirty One",
    "Thirty Two",
    "Thirty Three",
    "Thirty Four",
    "Thirty Five",
    "Thirty Six",
    "Thirty Seven",
    "Thirty Eight",
    "Thirty Nine",
    "Forty",
    "Forty One",
    "Forty Two",
    "Forty Three",
    "Forty Four",
    "Forty Five",
    "Forty Six",
    "Forty Seven",
    "Forty Eight",
    "Forty Nine",
    "Fifty",
    "Fifty One",
    "Fifty Two",
    "Fifty Three",
    "Fifty Four",
    "Fifty Five",
    "Fifty Six",
    "Fifty Seven",
    "Fifty Eight",
    "Fifty Nine",
];

/// Name of the hour for a 24 hour clock value (0-23).
pub fn hour_word(hour: u32) -> Result<&'static str, Error> {
    if hour > 23 {
        return Err(Error::HourOutOfRange(hour));
    }
    Ok(HOURS[(hour % 12) as usize])
}

/// Name of the minute (0-59).
pub fn minute_word(minute: u32) -> Result<&'static str, Error> {
    MINUTES
        .get(minute as usize)
        .copied()
        .ok_or(Error::MinuteOutOfRange(minute))
}

/// Copy a word into a fixed buffer, upper case.
pub fn shout(word: &str) -> Result<Word, Error> {
    let mut loud = Word::new();
    loud.push_str(word).map_err(|_| Error::WordTooLong)?;
    loud.make_ascii_uppercase();
    Ok(loud)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    HourOutOfRange(u32),
    MinuteOutOfRange(u32),
    WordTooLong,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::HourOutOfRange(hour) => write!(f, "hour {} is not in 0..=23", hour),
            Error::MinuteOutOfRange(minute) => write!(f, "minute {} is not in 0..=59", minute),
            Error::WordTooLong => write!(f, "word does not fit {} bytes", WORD_LEN),
        }
    }
}
