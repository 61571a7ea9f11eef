//! Market Comparison
//!
//! Compares a predicted price with the city's average price for the same
//! area, using a listings CSV with `City` and `Price_per_SqFt` columns.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct MarketRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Price_per_SqFt")]
    price_per_sqft: f64,
}

/// Average price per square foot by city
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    per_sqft: HashMap<String, (f64, usize)>,
}

impl MarketData {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ClientError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, ClientError> {
        let mut data = Self::default();
        let mut skipped = 0usize;
        for row in reader.deserialize::<MarketRow>() {
            let row = row?;
            if !row.price_per_sqft.is_finite() {
                skipped += 1;
                continue;
            }
            let entry = data.per_sqft.entry(row.city).or_insert((0.0, 0));
            entry.0 += row.price_per_sqft;
            entry.1 += 1;
        }
        debug!("Loaded market data for {} cities, skipped {} rows", data.per_sqft.len(), skipped);
        Ok(data)
    }

    /// Mean price per square foot in a city
    pub fn average_per_sqft(&self, city: &str) -> Option<f64> {
        self.per_sqft
            .get(city)
            .filter(|(_, count)| *count > 0)
            .map(|(sum, count)| sum / *count as f64)
    }

    /// Compare a prediction against the city average for the same area
    pub fn compare(&self, city: &str, square_ft: f64, predicted_lacs: f64) -> Option<MarketComparison> {
        let average_price_lacs = self.average_per_sqft(city)? * square_ft;
        Some(MarketComparison {
            city: city.to_string(),
            average_price_lacs,
            predicted_price_lacs: predicted_lacs,
        })
    }
}

/// City average against the predicted price
#[derive(Debug, Clone, PartialEq)]
pub struct MarketComparison {
    pub city: String,
    pub average_price_lacs: f64,
    pub predicted_price_lacs: f64,
}

impl MarketComparison {
    /// Prediction relative to the average, in percent
    pub fn difference_pct(&self) -> Option<f64> {
        if self.average_price_lacs == 0.0 {
            return None;
        }
        Some((self.predicted_price_lacs - self.average_price_lacs) / self.average_price_lacs * 100.0)
    }

    /// Horizontal text bar chart, bars at most `width` characters
    pub fn render(&self, width: usize) -> String {
        let max = self.average_price_lacs.max(self.predicted_price_lacs);
        let bar = |value: f64| -> String {
            let len = if max > 0.0 {
                ((value.max(0.0) / max) * width as f64).round() as usize
            } else {
                0
            };
            format!("{:<width$}", "#".repeat(len), width = width)
        };

        let mut out = format!("Market Comparison: {}\n", self.city);
        out.push_str(&format!(
            "  Avg City Price  |{}| {:.2} Lakhs\n",
            bar(self.average_price_lacs),
            self.average_price_lacs
        ));
        out.push_str(&format!(
            "  Predicted Price |{}| {:.2} Lakhs\n",
            bar(self.predicted_price_lacs),
            self.predicted_price_lacs
        ));
        if let Some(pct) = self.difference_pct() {
            let direction = if pct >= 0.0 { "above" } else { "below" };
            out.push_str(&format!("  {:.1}% {} the city average\n", pct.abs(), direction));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
City,Locality,Price_per_SqFt,Size_in_SqFt
Pune,Locality_1,0.10,900
Pune,Locality_2,0.20,1100
Mumbai,Locality_3,0.30,700
";

    #[test]
    fn test_average_per_city() {
        let data = MarketData::from_reader(CSV.as_bytes()).unwrap();
        assert!((data.average_per_sqft("Pune").unwrap() - 0.15).abs() < 1e-12);
        assert!((data.average_per_sqft("Mumbai").unwrap() - 0.30).abs() < 1e-12);
        assert_eq!(data.average_per_sqft("Jaipur"), None);
    }

    #[test]
    fn test_compare() {
        let data = MarketData::from_reader(CSV.as_bytes()).unwrap();
        let cmp = data.compare("Pune", 1000.0, 180.0).unwrap();
        assert!((cmp.average_price_lacs - 150.0).abs() < 1e-9);
        assert!((cmp.difference_pct().unwrap() - 20.0).abs() < 1e-9);
        assert!(data.compare("Noida", 1000.0, 50.0).is_none());
    }

    #[test]
    fn test_render_scales_bars() {
        let cmp = MarketComparison {
            city: "Pune".to_string(),
            average_price_lacs: 100.0,
            predicted_price_lacs: 50.0,
        };
        let chart = cmp.render(20);
        assert!(chart.contains(&format!("|{}|", "#".repeat(20))));
        assert!(chart.contains(&format!("|{}{}|", "#".repeat(10), " ".repeat(10))));
        assert!(chart.contains("50.0% below"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let result = MarketData::from_reader("City,Price\nPune,1\n".as_bytes());
        assert!(matches!(result, Err(ClientError::MarketData(_))));
    }
}
