use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{GridError, GridResult};

/// One cell of a [`DataTable`](crate::grid::DataTable) column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
    Decimal(Decimal),
    Time(DateTime<Utc>),
}

impl DataValue {
    /// Float cell; NaN is stored as [`DataValue::Missing`].
    #[must_use]
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Float(OrderedFloat(value))
        }
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_) | Self::Decimal(_))
    }

    /// Numeric view used for sorting numeric facet levels.
    ///
    /// Timestamps map to fractional Unix seconds at millisecond precision.
    pub fn as_f64(&self) -> GridResult<Option<f64>> {
        Ok(match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(value.0),
            Self::Decimal(value) => Some(value.to_f64().ok_or_else(|| {
                GridError::InvalidData(format!("decimal cell {value} does not fit in f64"))
            })?),
            Self::Time(time) => Some(time.timestamp_millis() as f64 / 1000.0),
            Self::Missing | Self::Bool(_) | Self::Text(_) => None,
        })
    }

    /// Canonical text encoding used for legend labels.
    #[must_use]
    pub fn to_utf8(&self) -> String {
        match self {
            Self::Missing => "nan".to_owned(),
            Self::Bool(true) => "True".to_owned(),
            Self::Bool(false) => "False".to_owned(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_float(value.0),
            Self::Text(value) => value.clone(),
            Self::Decimal(value) => value.to_string(),
            Self::Time(time) => time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Decimal> for DataValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::DataValue;

    #[test]
    fn canonical_text_encoding_matches_label_conventions() {
        assert_eq!(DataValue::from("Setosa").to_utf8(), "Setosa");
        assert_eq!(DataValue::from(3_i64).to_utf8(), "3");
        assert_eq!(DataValue::from(2.0).to_utf8(), "2.0");
        assert_eq!(DataValue::from(2.5).to_utf8(), "2.5");
        assert_eq!(DataValue::from(true).to_utf8(), "True");
        assert_eq!(DataValue::from(Decimal::new(1250, 2)).to_utf8(), "12.50");
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(DataValue::from(time).to_utf8(), "2024-03-01T12:00:00Z");
    }

    #[test]
    fn numeric_view_covers_decimals_and_timestamps() {
        assert_eq!(
            DataValue::from(Decimal::new(1250, 2)).as_f64().expect("decimal"),
            Some(12.5)
        );
        let time = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap();
        assert_eq!(DataValue::from(time).as_f64().expect("time"), Some(1.0));
        assert_eq!(DataValue::from("Dream").as_f64().expect("text"), None);
    }

    #[test]
    fn nan_and_none_become_missing() {
        assert!(DataValue::from(f64::NAN).is_missing());
        assert!(DataValue::from(None::<i64>).is_missing());
    }
}
