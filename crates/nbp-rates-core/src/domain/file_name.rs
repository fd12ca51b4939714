use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use time::{Date, Month};

static DATA_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"^c[0-9]{3}z[0-9]{6}$";
    Regex::new(pattern).expect("data file pattern must compile")
});

/// Offset of the `yyMMdd` part inside a data file name.
const DATE_OFFSET: usize = 5;

/// Remote index listing the data files of one year, or of the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexReference {
    Year(i32),
    Current,
}

impl IndexReference {
    /// File stem on the server, without extension.
    pub fn stem(self) -> String {
        match self {
            Self::Year(year) => format!("dir{year}"),
            Self::Current => String::from("dir"),
        }
    }
}

impl Display for IndexReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.stem())
    }
}

/// Name of a daily data file, e.g. `c002z200103`, with the date it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataFileName {
    name: String,
    date: Date,
}

impl DataFileName {
    /// Returns `None` unless `input` has the `c###z######` shape and its
    /// trailing digits read as a `yyMMdd` date.
    pub fn parse(input: &str) -> Option<Self> {
        if !DATA_FILE_PATTERN.is_match(input) {
            return None;
        }

        let date = parse_short_date(&input[DATE_OFFSET..])?;
        Some(Self {
            name: input.to_owned(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub const fn date(&self) -> Date {
        self.date
    }
}

impl Display for DataFileName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parses six ASCII digits as `yyMMdd`; two-digit years fall in 2000..=2099.
///
/// A day past the end of its month is clamped to the month's last day, so
/// `200230` reads as 2020-02-29. Days outside `1..=31` are rejected.
fn parse_short_date(digits: &str) -> Option<Date> {
    let year = 2000 + i32::from(two_digits(digits, 0)?);
    let month = Month::try_from(two_digits(digits, 2)?).ok()?;
    let day = two_digits(digits, 4)?;
    if !(1..=31).contains(&day) {
        return None;
    }

    (day.min(28)..=day)
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
}

fn two_digits(digits: &str, offset: usize) -> Option<u8> {
    digits.get(offset..offset + 2)?.parse().ok()
}
