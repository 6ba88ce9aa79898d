use chrono::Local;
use common::{history_window, District, DistrictDetail, HistoricalSeries, PerformanceSummary};

use super::{unwrap_envelope, unwrap_results, ApiClient, ApiError};

/// Optional filters for the district list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistrictQuery {
    pub state: Option<String>,
    pub search: Option<String>,
}

impl DistrictQuery {
    pub(crate) fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(state) = &self.state {
            pairs.push(format!("state={}", encode_query_value(state)));
        }
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", encode_query_value(search)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Minimal percent-encoding for query values; covers the characters district
/// and state names can realistically contain.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            ' ' => encoded.push_str("%20"),
            '&' => encoded.push_str("%26"),
            '=' => encoded.push_str("%3D"),
            '#' => encoded.push_str("%23"),
            '+' => encoded.push_str("%2B"),
            '?' => encoded.push_str("%3F"),
            _ => encoded.push(ch),
        }
    }
    encoded
}

impl ApiClient {
    /// GET /districts/ - list districts, optionally filtered by state or a
    /// name/code search term.
    pub async fn get_districts(&self, query: &DistrictQuery) -> Result<Vec<District>, ApiError> {
        let endpoint = format!("/districts/{}", query.to_query_string());
        log::trace!("Fetching district list: {}", endpoint);

        let body = self.get_value(&endpoint).await?;
        let payload = unwrap_results(unwrap_envelope(body));
        let districts: Vec<District> = serde_json::from_value(payload).map_err(|e| {
            let err = ApiError::decode(e);
            log::error!("Failed to decode district list: {}", err);
            err
        })?;

        log::info!("Fetched {} districts", districts.len());
        Ok(districts)
    }

    /// GET /districts/{id}/
    pub async fn get_district(&self, id: i64) -> Result<DistrictDetail, ApiError> {
        log::trace!("Fetching district detail for ID: {}", id);
        let result = self.get(&format!("/districts/{id}/")).await;

        if let Err(ref e) = result {
            log::error!("Failed to fetch district {}: {}", id, e);
        }

        result
    }

    /// GET /districts/{id}/summary/?year=&month=
    ///
    /// Without an explicit period the backend answers for the current month.
    pub async fn get_summary(
        &self,
        id: i64,
        period: Option<(i32, u32)>,
    ) -> Result<PerformanceSummary, ApiError> {
        let endpoint = match period {
            Some((year, month)) => format!("/districts/{id}/summary/?year={year}&month={month}"),
            None => format!("/districts/{id}/summary/"),
        };
        log::trace!("Fetching performance summary: {}", endpoint);

        let result = self.get(&endpoint).await;
        match &result {
            Ok(_) => log::info!("Successfully fetched summary for district ID: {}", id),
            Err(e) => log::warn!("Failed to fetch summary for district {}: {}", id, e),
        }

        result
    }

    /// GET /districts/{id}/history/?from=YYYY-MM&to=YYYY-MM
    ///
    /// `months` is a relative window counting back from the current calendar
    /// month inclusive; it is converted to the absolute range the backend
    /// expects before the request goes out.
    pub async fn get_history(&self, id: i64, months: u32) -> Result<HistoricalSeries, ApiError> {
        let today = Local::now().date_naive();
        let (from, to) = history_window(today, months);
        self.get_history_range(id, &from, &to).await
    }

    /// GET /districts/{id}/history/ with an explicit `YYYY-MM` range.
    pub async fn get_history_range(
        &self,
        id: i64,
        from: &str,
        to: &str,
    ) -> Result<HistoricalSeries, ApiError> {
        let endpoint = format!("/districts/{id}/history/?from={from}&to={to}");
        log::trace!("Fetching history: {}", endpoint);

        let result = self.get(&endpoint).await;
        match &result {
            Ok(_) => log::info!("Successfully fetched history for district ID: {}", id),
            Err(e) => log::warn!("Failed to fetch history for district {}: {}", id, e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_adds_nothing() {
        assert_eq!(DistrictQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_query_with_both_filters() {
        let query = DistrictQuery {
            state: Some("Karnataka".to_string()),
            search: Some("Bangalore".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "?state=Karnataka&search=Bangalore"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let query = DistrictQuery {
            state: Some("Tamil Nadu".to_string()),
            search: Some("a&b=c".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "?state=Tamil%20Nadu&search=a%26b%3Dc"
        );
    }

    #[test]
    fn test_search_only_query() {
        let query = DistrictQuery {
            state: None,
            search: Some("KA-BL".to_string()),
        };
        assert_eq!(query.to_query_string(), "?search=KA-BL");
    }
}
