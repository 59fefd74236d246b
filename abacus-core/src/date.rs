use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "chrono")]
use chrono::NaiveDate;

/// A calendar date kept in its `YYYY-MM-DD` wire spelling.
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Date<'a> {
    #[cfg_attr(feature = "serde", serde(borrow))]
    s: Cow<'a, str>,
}

impl<'a> Date<'a> {
    /// Wraps a date string without checking its shape.
    pub fn from_str_unchecked(s: &'a str) -> Self {
        Date { s: Cow::from(s) }
    }

    pub fn as_str(&self) -> &str {
        &self.s
    }
}

impl<'a> From<Cow<'a, str>> for Date<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Date { s }
    }
}

impl fmt::Display for Date<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for Date<'static> {
    fn from(d: NaiveDate) -> Self {
        Cow::from(d.format("%Y-%m-%d").to_string()).into()
    }
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_from_chrono() {
    assert_eq!(
        Date::from(chrono::NaiveDate::from_ymd(2020, 05, 05)),
        Cow::from("2020-05-05").into()
    );
}
