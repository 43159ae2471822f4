//! Analyst grade and sustainability operations (quote summary:
//! upgradeDowngradeHistory, esgScores).

use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{
    Recommendation, Recommendations, Result, SustainabilityScores, Symbol,
};

use crate::client::YahooClient;
use crate::quotesummary::{self, ModuleBundle, RawNum, num};

impl YahooClient {
    /// Fetches the analyst grade history.
    pub async fn recommendations(&self, symbol: &Symbol) -> Result<Recommendations> {
        let bundle = quotesummary::fetch_modules(self, symbol, "upgradeDowngradeHistory").await?;
        Ok(map_recommendations(symbol, bundle))
    }

    /// Fetches ESG scores.
    pub async fn sustainability(&self, symbol: &Symbol) -> Result<SustainabilityScores> {
        let bundle = quotesummary::fetch_modules(self, symbol, "esgScores").await?;
        Ok(map_sustainability(symbol, bundle))
    }
}

fn map_recommendations(symbol: &Symbol, bundle: Option<ModuleBundle>) -> Recommendations {
    let grades = bundle
        .and_then(|b| b.upgrade_downgrade_history)
        .and_then(|m| m.history)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            // The firm and the grade date are the only required pieces.
            match (row.epoch_grade_date, row.firm) {
                (Some(timestamp), Some(firm)) => Some(Recommendation {
                    timestamp,
                    firm,
                    to_grade: row.to_grade,
                    from_grade: row.from_grade,
                    action: row.action,
                }),
                _ => {
                    warn!("Skipping grade row without a firm or date for {}", symbol);
                    None
                }
            }
        })
        .collect();

    Recommendations {
        symbol: symbol.clone(),
        grades,
    }
}

fn map_sustainability(symbol: &Symbol, bundle: Option<ModuleBundle>) -> SustainabilityScores {
    let module = bundle.and_then(|b| b.esg_scores);
    let Some(module) = module else {
        return SustainabilityScores {
            symbol: symbol.clone(),
            ..SustainabilityScores::default()
        };
    };

    let as_of = match (module.rating_year, module.rating_month) {
        (Some(year), Some(month)) => Some(format!("{year:04}-{month:02}")),
        (Some(year), None) => Some(format!("{year:04}")),
        _ => None,
    };

    SustainabilityScores {
        symbol: symbol.clone(),
        total_esg: num(module.total_esg),
        environment_score: num(module.environment_score),
        social_score: num(module.social_score),
        governance_score: num(module.governance_score),
        highest_controversy: num(module.highest_controversy),
        as_of,
    }
}

// ============================================================================
// Quote Summary Module Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct UpgradeDowngradeModule {
    history: Option<Vec<GradeRow>>,
}

/// Grade rows arrive with bare values, not `{raw, fmt}` pairs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GradeRow {
    epoch_grade_date: Option<i64>,
    firm: Option<String>,
    to_grade: Option<String>,
    from_grade: Option<String>,
    action: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EsgScoresModule {
    total_esg: Option<RawNum>,
    environment_score: Option<RawNum>,
    social_score: Option<RawNum>,
    governance_score: Option<RawNum>,
    highest_controversy: Option<RawNum>,
    rating_year: Option<i64>,
    rating_month: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotesummary::{QuoteSummaryResponse, take_bundle};

    fn symbol() -> Symbol {
        Symbol::new("AAPL")
    }

    fn bundle_from(json: &str) -> Option<ModuleBundle> {
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        take_bundle(response, &symbol()).unwrap()
    }

    #[test]
    fn grade_rows_map_with_derived_predicates() {
        let bundle = bundle_from(
            r#"{
                "quoteSummary": {
                    "result": [{
                        "upgradeDowngradeHistory": {
                            "history": [
                                {
                                    "epochGradeDate": 1717027200,
                                    "firm": "Morgan Stanley",
                                    "toGrade": "Overweight",
                                    "fromGrade": "Equal-Weight",
                                    "action": "up"
                                },
                                {
                                    "epochGradeDate": 1716940800,
                                    "firm": "Barclays",
                                    "toGrade": "Underweight",
                                    "action": "down"
                                },
                                {"toGrade": "Buy", "action": "init"}
                            ]
                        }
                    }],
                    "error": null
                }
            }"#,
        );

        let recommendations = map_recommendations(&symbol(), bundle);
        assert_eq!(recommendations.grades.len(), 2);
        assert!(recommendations.grades[0].is_upgrade());
        assert!(!recommendations.grades[0].is_downgrade());
        assert!(recommendations.grades[1].is_downgrade());
        assert_eq!(recommendations.grades[1].from_grade, None);
    }

    #[test]
    fn esg_scores_carry_the_rating_period() {
        let bundle = bundle_from(
            r#"{
                "quoteSummary": {
                    "result": [{
                        "esgScores": {
                            "totalEsg": {"raw": 17.2},
                            "environmentScore": {"raw": 0.6},
                            "socialScore": {"raw": 7.4},
                            "governanceScore": {"raw": 9.2},
                            "highestControversy": {"raw": 3},
                            "ratingYear": 2024,
                            "ratingMonth": 9
                        }
                    }],
                    "error": null
                }
            }"#,
        );

        let scores = map_sustainability(&symbol(), bundle);
        assert_eq!(scores.total_esg, Some(17.2));
        assert_eq!(scores.governance_score, Some(9.2));
        assert_eq!(scores.as_of.as_deref(), Some("2024-09"));
    }

    #[test]
    fn absent_module_maps_to_all_absent_scores() {
        let scores = map_sustainability(&symbol(), None);
        assert_eq!(scores.symbol.as_str(), "AAPL");
        assert_eq!(scores.total_esg, None);
        assert_eq!(scores.as_of, None);
    }
}
