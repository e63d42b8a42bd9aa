//! Transaction response schema.
//!
//! Every record field is a required string. Records with numeric or `null`
//! values fail to deserialize.

use serde::{Deserialize, Serialize};

/// One real estate transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RealEstateRecord {
    /// Price information category, e.g. "不動産取引価格情報".
    pub price_category: String,
    /// Transaction type, e.g. "宅地(土地と建物)" or "中古マンション等".
    #[serde(rename = "Type")]
    pub kind: String,
    /// Area classification such as "住宅地" or "商業地".
    pub region: String,
    /// Five-digit municipality code.
    pub municipality_code: String,
    /// Prefecture name.
    pub prefecture: String,
    /// City, ward or town name.
    pub municipality: String,
    /// District within the municipality.
    pub district_name: String,
    /// Total transaction price in yen.
    pub trade_price: String,
    /// Price per tsubo in yen.
    pub price_per_unit: String,
    /// Layout such as "3LDK".
    pub floor_plan: String,
    /// Land or unit area in square meters.
    pub area: String,
    /// Price per square meter in yen.
    pub unit_price: String,
    /// Lot shape, e.g. "ほぼ長方形".
    pub land_shape: String,
    /// Frontage width in meters.
    pub frontage: String,
    /// Total floor area in square meters.
    pub total_floor_area: String,
    /// Construction year, e.g. "2015年".
    pub building_year: String,
    /// Building structure such as "RC" or "木造".
    pub structure: String,
    /// Current use of the property.
    #[serde(rename = "Use")]
    pub usage: String,
    /// Intended use after the transaction.
    pub purpose: String,
    /// Direction the fronting road faces.
    pub direction: String,
    /// Fronting road classification.
    pub classification: String,
    /// Fronting road width in meters.
    pub breadth: String,
    /// Zoning under the City Planning Act.
    pub city_planning: String,
    /// Maximum building coverage ratio in percent.
    pub coverage_ratio: String,
    /// Maximum floor area ratio in percent.
    pub floor_area_ratio: String,
    /// Transaction quarter, e.g. "2023年第1四半期".
    pub period: String,
    /// Whether the building was renovated.
    pub renovation: String,
    /// Free-form notes about the transaction.
    pub remarks: String,
}

/// Enveloped transaction search answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealEstateResponse {
    /// Status reported by the API, "OK" on success.
    pub status: String,
    /// Matching transactions.
    pub data: Vec<RealEstateRecord>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_names() {
        let record: RealEstateRecord = serde_json::from_value(fixtures::record()).unwrap();
        assert_eq!(record.kind, "中古マンション等");
        assert_eq!(record.usage, "住宅");
        assert_eq!(record.municipality_code, "13101");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, fixtures::record());
    }

    #[test]
    fn test_numeric_field_is_rejected() {
        let mut record = fixtures::record();
        record["TradePrice"] = serde_json::json!(50000000);
        assert!(serde_json::from_value::<RealEstateRecord>(record).is_err());
    }

    #[test]
    fn test_null_field_is_rejected() {
        let mut record = fixtures::record();
        record["Remarks"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<RealEstateRecord>(record).is_err());
    }

    #[test]
    fn test_bare_list_is_rejected() {
        let body = serde_json::json!([fixtures::record()]);
        assert!(serde_json::from_value::<RealEstateResponse>(body).is_err());
    }
}
