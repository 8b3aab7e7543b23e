use chrono::NaiveDate;
use marketplace_catalog::{Platform, PluginFunction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("log in to submit plugins")]
    LoginRequired,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("the terms of service and privacy policy must be accepted")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Pending,
    Rejected,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Pending => "Pending Review",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

/// The upload form of the developer center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSubmission {
    pub name: String,
    pub platform: Option<Platform>,
    pub function: Option<PluginFunction>,
    pub description: String,
    pub version: String,
    pub agreed_to_terms: bool,
}

impl Default for PluginSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            platform: None,
            function: None,
            description: String::new(),
            version: "1.0.0".to_string(),
            agreed_to_terms: false,
        }
    }
}

impl PluginSubmission {
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.platform.is_none() {
            missing.push("platform");
        }
        if self.function.is_none() {
            missing.push("function");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }
        if !self.agreed_to_terms {
            return Err(SubmissionError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedPlugin {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub function: PluginFunction,
    pub version: String,
    pub status: ReviewStatus,
    pub submitted_date: NaiveDate,
    pub review_date: Option<NaiveDate>,
    pub downloads: u64,
    pub feedback: Option<String>,
}

/// Per-status counts for the developer dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl SubmissionSummary {
    pub fn of(submissions: &[SubmittedPlugin]) -> Self {
        submissions
            .iter()
            .fold(Self::default(), |mut summary, submission| {
                summary.total += 1;
                match submission.status {
                    ReviewStatus::Approved => summary.approved += 1,
                    ReviewStatus::Pending => summary.pending += 1,
                    ReviewStatus::Rejected => summary.rejected += 1,
                }
                summary
            })
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Submissions shown on a fresh developer dashboard.
pub fn sample_submissions() -> Vec<SubmittedPlugin> {
    vec![
        SubmittedPlugin {
            id: "dev-1".into(),
            name: "My Custom Analyzer".into(),
            platform: Platform::Visualizer,
            function: PluginFunction::Geoprocessing,
            version: "1.2.1".into(),
            status: ReviewStatus::Approved,
            submitted_date: date(2024, 1, 10),
            review_date: Some(date(2024, 1, 15)),
            downloads: 1247,
            feedback: Some("Great plugin! Well documented and performs efficiently.".into()),
        },
        SubmittedPlugin {
            id: "dev-2".into(),
            name: "Advanced Data Viewer".into(),
            platform: Platform::Cms,
            function: PluginFunction::UiEnhancements,
            version: "2.0.0".into(),
            status: ReviewStatus::Pending,
            submitted_date: date(2024, 1, 18),
            review_date: None,
            downloads: 0,
            feedback: None,
        },
        SubmittedPlugin {
            id: "dev-3".into(),
            name: "AI Classification Tool".into(),
            platform: Platform::Flow,
            function: PluginFunction::Ai,
            version: "1.0.0".into(),
            status: ReviewStatus::Rejected,
            submitted_date: date(2024, 1, 5),
            review_date: Some(date(2024, 1, 12)),
            downloads: 0,
            feedback: Some(
                "Please improve error handling and add more comprehensive documentation.".into(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete() -> PluginSubmission {
        PluginSubmission {
            name: "Contour Lines".into(),
            platform: Some(Platform::Visualizer),
            function: Some(PluginFunction::Geoprocessing),
            description: "Generate contour lines from terrain".into(),
            agreed_to_terms: true,
            ..PluginSubmission::default()
        }
    }

    #[test]
    fn default_form_lists_every_missing_field() {
        assert_eq!(
            PluginSubmission::default().validate(),
            Err(SubmissionError::MissingFields(vec![
                "name",
                "platform",
                "function",
                "description"
            ]))
        );
        assert_eq!(PluginSubmission::default().version, "1.0.0");
    }

    #[test]
    fn fields_are_checked_before_terms() {
        let mut form = complete();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(SubmissionError::TermsNotAccepted));
        form.description = " ".into();
        assert_eq!(
            form.validate(),
            Err(SubmissionError::MissingFields(vec!["description"]))
        );
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn summary_counts_statuses() {
        let summary = SubmissionSummary::of(&sample_submissions());
        assert_eq!(
            summary,
            SubmissionSummary {
                total: 3,
                approved: 1,
                pending: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn missing_fields_message_joins_names() {
        let err = SubmissionError::MissingFields(vec!["name", "platform"]);
        assert_eq!(err.to_string(), "missing required fields: name, platform");
    }
}
