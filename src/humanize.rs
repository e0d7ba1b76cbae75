//! Human-readable byte sizes and durations for enclosure metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid size format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

const MIB: u64 = 1024 * 1024;

/// Byte size wrapper accepting either an integer or a string such as `"5MB"`
///
/// Feeds put enclosure lengths in attributes, so the value usually arrives
/// as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Size in mebibytes, rounded to two decimals
    pub fn as_mib(&self) -> f64 {
        (self.0 as f64 / MIB as f64 * 100.0).round() / 100.0
    }

    pub fn to_human_readable(&self) -> String {
        const UNITS: &[(&str, u64)] = &[
            ("B", 1),
            ("KB", 1024),
            ("MB", MIB),
            ("GB", 1024 * MIB),
            ("TB", 1024 * 1024 * MIB),
        ];

        for (i, &(unit, divisor)) in UNITS.iter().enumerate().rev() {
            if self.0 >= divisor {
                let value = self.0 / divisor;
                let remainder = self.0 % divisor;

                if remainder == 0 || i == 0 {
                    return format!("{}{}", value, unit);
                }
                let decimal = remainder * 10 / divisor;
                if decimal > 0 {
                    return format!("{}.{}{}", value, decimal, unit);
                }
                return format!("{}{}", value, unit);
            }
        }

        format!("{}B", self.0)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ByteSizeVisitor;

        impl<'de> serde::de::Visitor<'de> for ByteSizeVisitor {
            type Value = ByteSize;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a byte size as string (e.g., \"12345\", \"5MB\") or integer")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ByteSize(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(v)
                    .map(ByteSize)
                    .map_err(|_| E::custom(format!("negative byte size: {v}")))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<ByteSize>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(ByteSizeVisitor)
    }
}

impl FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();

        if let Ok(num) = s.parse::<u64>() {
            return Ok(ByteSize(num));
        }

        let (num_str, unit) = if let Some(pos) = s.find(|c: char| !c.is_ascii_digit()) {
            (&s[..pos], &s[pos..])
        } else {
            return Err(ParseError::InvalidFormat(s.to_string()));
        };

        let num: u64 = num_str.parse()?;

        let multiplier = match unit.trim() {
            "B" => 1,
            "K" | "KB" | "KIB" => 1024,
            "M" | "MB" | "MIB" => MIB,
            "G" | "GB" | "GIB" => 1024 * MIB,
            "T" | "TB" | "TIB" => 1024 * 1024 * MIB,
            _ => return Err(ParseError::InvalidUnit(unit.to_string())),
        };

        Ok(ByteSize(num * multiplier))
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_human_readable())
    }
}

/// Format seconds as `m:ss`, or `h:mm:ss` once there is at least an hour
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes() {
        assert_eq!("1024".parse::<ByteSize>().unwrap().as_u64(), 1024);
        assert_eq!("1KB".parse::<ByteSize>().unwrap().as_u64(), 1024);
        assert_eq!(" 31337 ".parse::<ByteSize>().unwrap().as_u64(), 31337);
    }

    #[test]
    fn test_parse_megabytes() {
        assert_eq!("5MB".parse::<ByteSize>().unwrap().as_u64(), 5 * MIB);
        assert_eq!("5MiB".parse::<ByteSize>().unwrap().as_u64(), 5 * MIB);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("MB".parse::<ByteSize>().is_err());
        assert!("12 parsecs".parse::<ByteSize>().is_err());
    }

    #[test]
    fn test_as_mib_rounds_to_two_decimals() {
        assert_eq!(ByteSize(MIB).as_mib(), 1.0);
        assert_eq!(ByteSize(5_000_000).as_mib(), 4.77);
        assert_eq!(ByteSize(0).as_mib(), 0.0);
    }

    #[test]
    fn test_to_human_readable() {
        assert_eq!(ByteSize(1024).to_human_readable(), "1KB");
        assert_eq!(ByteSize(5 * MIB).to_human_readable(), "5MB");
        assert_eq!(ByteSize(1536).to_human_readable(), "1.5KB");
        assert_eq!(ByteSize(12).to_human_readable(), "12B");
    }

    #[test]
    fn test_deserialize_string_and_number() {
        #[derive(Deserialize)]
        struct TestStruct {
            size: ByteSize,
        }
        let parsed: TestStruct = serde_json::from_str(r#"{"size": "10MB"}"#).unwrap();
        assert_eq!(parsed.size.as_u64(), 10 * MIB);

        let parsed: TestStruct = serde_json::from_str(r#"{"size": 1024}"#).unwrap();
        assert_eq!(parsed.size.as_u64(), 1024);

        assert!(serde_json::from_str::<TestStruct>(r#"{"size": -4}"#).is_err());
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "0:00");
        assert_eq!(format_hms(65), "1:05");
        assert_eq!(format_hms(600), "10:00");
        assert_eq!(format_hms(3661), "1:01:01");
        assert_eq!(format_hms(36_000), "10:00:00");
    }
}
