use common::{
    format_period, ComparisonResult, Metric, MAX_COMPARE_DISTRICTS, MIN_COMPARE_DISTRICTS,
};

use super::{ApiClient, ApiError};

/// Parameters for a multi-district comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareParams {
    pub district_ids: Vec<i64>,
    pub metric: Metric,
    pub year: i32,
    pub month: u32,
}

impl CompareParams {
    pub(crate) fn to_endpoint(&self) -> String {
        let districts = self
            .district_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "/compare/?districts={}&metric={}&period={}",
            districts,
            self.metric.query_key(),
            format_period(self.year, self.month)
        )
    }

    fn validate(&self) -> Result<(), ApiError> {
        let count = self.district_ids.len();
        if !(MIN_COMPARE_DISTRICTS..=MAX_COMPARE_DISTRICTS).contains(&count) {
            return Err(ApiError::validation(format!(
                "Comparison needs {MIN_COMPARE_DISTRICTS} to {MAX_COMPARE_DISTRICTS} districts, got {count}"
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ApiError::validation(format!(
                "Month must be between 1 and 12, got {}",
                self.month
            )));
        }
        Ok(())
    }
}

impl ApiClient {
    /// GET /compare/?districts=id,id&metric=snake_case&period=YYYY-MM
    ///
    /// The 2-5 district invariant is enforced here as well as in the UI so a
    /// malformed request never leaves the client.
    pub async fn compare(&self, params: &CompareParams) -> Result<ComparisonResult, ApiError> {
        params.validate()?;

        let endpoint = params.to_endpoint();
        log::trace!("Comparing districts: {}", endpoint);

        let result = self.get(&endpoint).await;
        match &result {
            Ok(_) => log::info!(
                "Successfully compared {} districts on {}",
                params.district_ids.len(),
                params.metric.query_key()
            ),
            Err(e) => log::error!("Comparison failed: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ids: Vec<i64>) -> CompareParams {
        CompareParams {
            district_ids: ids,
            metric: Metric::MaterialExpenditure,
            year: 2024,
            month: 10,
        }
    }

    #[test]
    fn test_endpoint_joins_ids_and_maps_metric() {
        assert_eq!(
            params(vec![1, 2, 3]).to_endpoint(),
            "/compare/?districts=1,2,3&metric=material_expenditure&period=2024-10"
        );
    }

    #[test]
    fn test_endpoint_pads_single_digit_month() {
        let params = CompareParams {
            district_ids: vec![4, 9],
            metric: Metric::PersonDays,
            year: 2023,
            month: 3,
        };
        assert_eq!(
            params.to_endpoint(),
            "/compare/?districts=4,9&metric=person_days&period=2023-03"
        );
    }

    #[test]
    fn test_too_few_districts_fail_validation() {
        let err = params(vec![1]).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_too_many_districts_fail_validation() {
        let err = params(vec![1, 2, 3, 4, 5, 6]).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(params(vec![1, 2]).validate().is_ok());
        assert!(params(vec![1, 2, 3, 4, 5]).validate().is_ok());
    }

    #[test]
    fn test_invalid_month_fails_validation() {
        let mut invalid = params(vec![1, 2]);
        invalid.month = 13;
        assert!(matches!(
            invalid.validate().unwrap_err(),
            ApiError::Validation { .. }
        ));
    }
}
