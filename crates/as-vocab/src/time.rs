//! `xsd:dateTime` values.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An RFC 3339 date-time, written back exactly as it was read.
///
/// The parsed value keeps the offset it was published with; the text keeps
/// its precision and the choice between `Z` and `+00:00`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timestamp {
    text: String,
    datetime: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        let datetime = datetime.fixed_offset();
        Self {
            text: datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            datetime,
        }
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            datetime: DateTime::parse_from_rfc3339(text)?,
            text: text.to_owned(),
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|err| de::Error::custom(format!("invalid date-time {text:?}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn keeps_the_written_offset() {
        let timestamp: Timestamp = "2015-02-10T15:04:55-08:00".parse().unwrap();
        assert_eq!(timestamp.as_str(), "2015-02-10T15:04:55-08:00");
        assert_eq!(timestamp.datetime().offset().local_minus_utc(), -8 * 3600);
        assert_eq!(
            timestamp.datetime().with_timezone(&Utc).to_rfc3339(),
            "2015-02-10T23:04:55+00:00"
        );
    }

    #[test]
    fn keeps_precision_and_zulu() {
        for text in ["2015-01-25T12:34:56Z", "2015-01-25T12:34:56.250+00:00"] {
            let timestamp: Timestamp = serde_json::from_value(serde_json::json!(text)).unwrap();
            assert_eq!(serde_json::to_value(&timestamp).unwrap(), serde_json::json!(text));
        }
    }

    #[test]
    fn from_datetime() {
        let datetime = Utc.with_ymd_and_hms(2016, 3, 17, 0, 0, 0).unwrap();
        assert_eq!(Timestamp::from(datetime).as_str(), "2016-03-17T00:00:00Z");
    }

    #[test]
    fn rejects_other_text() {
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!(serde_json::from_value::<Timestamp>(serde_json::json!(1424)).is_err());
    }
}
