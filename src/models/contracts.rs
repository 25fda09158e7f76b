use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for `POST /api/compare-contracts`. The split form is used
/// whenever the profile carries a backend-derived normal/dal split; the
/// legacy form sends the single monthly figure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CompareRequest {
    Split {
        #[serde(rename = "monthlyNormalUsed")]
        monthly_normal_used: f64,
        #[serde(rename = "monthlyLowUsed")]
        monthly_low_used: f64,
    },
    Monthly {
        #[serde(rename = "monthlyConsumption")]
        monthly_consumption: f64,
    },
}

impl CompareRequest {
    pub fn split(monthly_normal_used: f64, monthly_low_used: f64) -> Self {
        Self::Split {
            monthly_normal_used,
            monthly_low_used,
        }
    }

    pub fn monthly(monthly_consumption: f64) -> Self {
        Self::Monthly {
            monthly_consumption,
        }
    }
}

/// One contract offer as returned by the comparison endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    #[serde(default)]
    pub provider: String,
    /// "Dynamisch", "Variabel" or "Vast"
    #[serde(rename = "type", alias = "contractName", default)]
    pub contract_type: String,
    #[serde(rename = "monthlyCost", default, deserialize_with = "lenient_f64")]
    pub monthly_cost: f64,
    #[serde(rename = "yearlyCost", default, deserialize_with = "lenient_f64")]
    pub yearly_cost: f64,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(rename = "normalRate", default)]
    pub normal_rate: Option<f64>,
    #[serde(rename = "lowRate", default)]
    pub low_rate: Option<f64>,
    #[serde(default)]
    pub monthly_breakdown: IndexMap<String, MonthCost>,
}

/// Per-month entry of a contract's breakdown. Older payloads carry a bare
/// cost number, newer ones an object with cost and usage detail.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MonthCost {
    Detailed {
        #[serde(default)]
        totaal: f64,
        #[serde(default)]
        kosten_normaal: f64,
        #[serde(default)]
        kosten_dal: f64,
        #[serde(default)]
        verbruik_normaal: f64,
        #[serde(default)]
        verbruik_dal: f64,
    },
    Total(f64),
}

impl MonthCost {
    pub fn total(&self) -> f64 {
        match self {
            Self::Detailed { totaal, .. } => *totaal,
            Self::Total(total) => *total,
        }
    }

    pub fn cost_normal(&self) -> f64 {
        match self {
            Self::Detailed { kosten_normaal, .. } => *kosten_normaal,
            Self::Total(_) => 0.0,
        }
    }

    pub fn cost_low(&self) -> f64 {
        match self {
            Self::Detailed { kosten_dal, .. } => *kosten_dal,
            Self::Total(_) => 0.0,
        }
    }

    pub fn usage_normal(&self) -> f64 {
        match self {
            Self::Detailed {
                verbruik_normaal, ..
            } => *verbruik_normaal,
            Self::Total(_) => 0.0,
        }
    }

    pub fn usage_low(&self) -> f64 {
        match self {
            Self::Detailed { verbruik_dal, .. } => *verbruik_dal,
            Self::Total(_) => 0.0,
        }
    }
}

/// Coerce a cost value to f64. Accepts numbers and numeric strings; anything
/// else (missing, null, garbage) becomes 0 so NaN never reaches rendering.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_coerced_and_never_nan() {
        let raw = r#"[
            {"provider": "A", "type": "Vast", "monthlyCost": 42.5, "yearlyCost": 510},
            {"provider": "B", "type": "Variabel", "monthlyCost": "38.20", "yearlyCost": "oops"},
            {"provider": "C", "contractName": "Dynamisch", "monthlyCost": null}
        ]"#;
        let contracts: Vec<Contract> = serde_json::from_str(raw).unwrap();
        assert_eq!(contracts[0].monthly_cost, 42.5);
        assert_eq!(contracts[0].yearly_cost, 510.0);
        assert_eq!(contracts[1].monthly_cost, 38.20);
        assert_eq!(contracts[1].yearly_cost, 0.0);
        assert_eq!(contracts[2].monthly_cost, 0.0);
        assert_eq!(contracts[2].contract_type, "Dynamisch");
        for c in &contracts {
            assert!(c.monthly_cost.is_finite() && c.yearly_cost.is_finite());
        }
    }

    #[test]
    fn breakdown_accepts_bare_numbers_and_objects() {
        let raw = r#"{
            "provider": "X",
            "type": "Vast",
            "monthlyCost": 10,
            "yearlyCost": 120,
            "monthly_breakdown": {
                "1": 55.2,
                "2": {"totaal": 48.0, "verbruik_normaal": 210.0, "verbruik_dal": 130.0}
            }
        }"#;
        let contract: Contract = serde_json::from_str(raw).unwrap();
        assert_eq!(contract.monthly_breakdown["1"].total(), 55.2);
        assert_eq!(contract.monthly_breakdown["2"].total(), 48.0);
        assert_eq!(contract.monthly_breakdown["2"].usage_normal(), 210.0);
        assert_eq!(contract.monthly_breakdown["1"].usage_low(), 0.0);
    }

    #[test]
    fn compare_request_serializes_both_forms() {
        let split = serde_json::to_value(CompareRequest::split(250.0, 160.0)).unwrap();
        assert_eq!(split["monthlyNormalUsed"], 250.0);
        assert_eq!(split["monthlyLowUsed"], 160.0);
        let legacy = serde_json::to_value(CompareRequest::monthly(350.0)).unwrap();
        assert_eq!(legacy["monthlyConsumption"], 350.0);
        assert!(legacy.get("monthlyNormalUsed").is_none());
    }
}
