use serde::{Deserialize, Serialize};

/// A district as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub state: String,
    #[serde(default)]
    pub population: Option<i64>,
}

/// Full district record from the detail endpoint. Geolocation values are
/// decimal fields and arrive on the wire as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDetail {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub state: String,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Short district reference embedded in summary and history payloads.
/// The summary variant carries the code, the history variant does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRef {
    pub id: i64,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_list_row_deserializes() {
        let district: District = serde_json::from_str(
            r#"{"id": 3, "name": "Mysuru", "code": "KA-MY", "state": "Karnataka", "population": 3001127}"#,
        )
        .expect("valid district row");

        assert_eq!(district.id, 3);
        assert_eq!(district.code, "KA-MY");
        assert_eq!(district.population, Some(3001127));
    }

    #[test]
    fn test_district_detail_decimal_strings() {
        let detail: DistrictDetail = serde_json::from_str(
            r#"{
                "id": 3, "name": "Mysuru", "code": "KA-MY", "state": "Karnataka",
                "population": 3001127, "lat": "12.2958", "lon": "76.6394",
                "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-06-01T00:00:00Z"
            }"#,
        )
        .expect("valid district detail");

        assert_eq!(detail.lat.as_deref(), Some("12.2958"));
        assert_eq!(detail.updated_at.as_deref(), Some("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn test_district_ref_without_code() {
        let district: DistrictRef =
            serde_json::from_str(r#"{"id": 1, "name": "Ballari", "state": "Karnataka"}"#)
                .expect("valid district ref");

        assert_eq!(district.code, None);
    }
}
