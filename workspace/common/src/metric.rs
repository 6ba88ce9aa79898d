/// The four monthly performance metrics tracked per district.
///
/// The UI works with camelCase keys while the backend's compare endpoint
/// expects snake_case identifiers; this enum is the single mapping between
/// the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    PersonDays,
    HouseholdsWorked,
    TotalWages,
    MaterialExpenditure,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::PersonDays,
        Metric::HouseholdsWorked,
        Metric::TotalWages,
        Metric::MaterialExpenditure,
    ];

    /// camelCase key used in summary/history payloads and selector values.
    pub fn ui_key(&self) -> &'static str {
        match self {
            Metric::PersonDays => "personDays",
            Metric::HouseholdsWorked => "householdsWorked",
            Metric::TotalWages => "totalWages",
            Metric::MaterialExpenditure => "materialExpenditure",
        }
    }

    /// snake_case identifier the compare endpoint expects.
    pub fn query_key(&self) -> &'static str {
        match self {
            Metric::PersonDays => "person_days",
            Metric::HouseholdsWorked => "households_worked",
            Metric::TotalWages => "total_wages",
            Metric::MaterialExpenditure => "material_expenditure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::PersonDays => "Person Days",
            Metric::HouseholdsWorked => "Households Worked",
            Metric::TotalWages => "Total Wages",
            Metric::MaterialExpenditure => "Material Expenditure",
        }
    }

    pub fn chart_color(&self) -> &'static str {
        match self {
            Metric::PersonDays => "#2563eb",
            Metric::HouseholdsWorked => "#10b981",
            Metric::TotalWages => "#f59e0b",
            Metric::MaterialExpenditure => "#ef4444",
        }
    }

    /// Wage and expenditure values are rupee amounts and get the currency
    /// prefix when displayed.
    pub fn is_currency(&self) -> bool {
        matches!(self, Metric::TotalWages | Metric::MaterialExpenditure)
    }

    /// Resolve a UI metric key. Unknown keys fall back to person days rather
    /// than failing, matching the backend's default metric.
    pub fn from_ui_key(key: &str) -> Metric {
        match key {
            "personDays" => Metric::PersonDays,
            "householdsWorked" => Metric::HouseholdsWorked,
            "totalWages" => Metric::TotalWages,
            "materialExpenditure" => Metric::MaterialExpenditure,
            other => {
                tracing::debug!(key = other, "unknown metric key, defaulting to person days");
                Metric::PersonDays
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_key_maps_to_query_key() {
        assert_eq!(
            Metric::from_ui_key("materialExpenditure").query_key(),
            "material_expenditure"
        );
        assert_eq!(
            Metric::from_ui_key("householdsWorked").query_key(),
            "households_worked"
        );
        assert_eq!(Metric::from_ui_key("totalWages").query_key(), "total_wages");
    }

    #[test]
    fn test_unknown_key_falls_back_to_person_days() {
        assert_eq!(Metric::from_ui_key("wageExpenditure"), Metric::PersonDays);
        assert_eq!(Metric::from_ui_key(""), Metric::PersonDays);
        assert_eq!(Metric::from_ui_key("person_days"), Metric::PersonDays);
    }

    #[test]
    fn test_round_trip_through_ui_key() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_ui_key(metric.ui_key()), metric);
        }
    }

    #[test]
    fn test_currency_metrics() {
        assert!(Metric::TotalWages.is_currency());
        assert!(Metric::MaterialExpenditure.is_currency());
        assert!(!Metric::PersonDays.is_currency());
        assert!(!Metric::HouseholdsWorked.is_currency());
    }
}
