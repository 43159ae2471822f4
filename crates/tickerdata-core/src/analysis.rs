//! Analyst recommendations, news and sustainability entities.

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// One analyst grade change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Grade date, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Research firm issuing the grade.
    pub firm: String,
    /// New grade (e.g. `"Buy"`).
    pub to_grade: Option<String>,
    /// Previous grade.
    pub from_grade: Option<String>,
    /// Direction of the change as reported (e.g. `"up"`, `"down"`, `"init"`).
    pub action: Option<String>,
}

impl Recommendation {
    /// Returns true when the action marks an upgrade.
    #[must_use]
    pub fn is_upgrade(&self) -> bool {
        self.action
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case("up"))
    }

    /// Returns true when the action marks a downgrade.
    #[must_use]
    pub fn is_downgrade(&self) -> bool {
        self.action
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case("down"))
    }
}

/// Analyst grade history for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Grade changes as served by the upstream.
    pub grades: Vec<Recommendation>,
}

/// One news article related to a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// Publishing outlet.
    pub publisher: Option<String>,
    /// Link to the article.
    pub link: Option<String>,
    /// Publication timestamp, seconds since the Unix epoch.
    pub published_at: Option<i64>,
    /// Article kind as reported (e.g. `"STORY"`).
    pub article_type: Option<String>,
    /// Tickers the article is tagged with.
    pub related_tickers: Vec<String>,
}

/// ESG scores for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityScores {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Total ESG risk score.
    pub total_esg: Option<f64>,
    /// Environmental pillar score.
    pub environment_score: Option<f64>,
    /// Social pillar score.
    pub social_score: Option<f64>,
    /// Governance pillar score.
    pub governance_score: Option<f64>,
    /// Highest controversy level reported.
    pub highest_controversy: Option<f64>,
    /// Rating period label (`YYYY-MM`), when disclosed.
    pub as_of: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(action: Option<&str>) -> Recommendation {
        Recommendation {
            timestamp: 1_700_000_000,
            firm: "Morgan Stanley".to_string(),
            to_grade: Some("Overweight".to_string()),
            from_grade: Some("Equal-Weight".to_string()),
            action: action.map(str::to_string),
        }
    }

    #[test]
    fn upgrade_and_downgrade_come_from_the_action() {
        assert!(grade(Some("up")).is_upgrade());
        assert!(grade(Some("UP")).is_upgrade());
        assert!(!grade(Some("up")).is_downgrade());

        assert!(grade(Some("down")).is_downgrade());
        assert!(!grade(Some("down")).is_upgrade());

        assert!(!grade(Some("init")).is_upgrade());
        assert!(!grade(Some("init")).is_downgrade());
        assert!(!grade(None).is_upgrade());
        assert!(!grade(None).is_downgrade());
    }
}
