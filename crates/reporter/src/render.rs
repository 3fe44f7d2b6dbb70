//! Deterministic plain-text rendering of the aggregated report.

use crate::aggregate::AggregatedReport;
use crate::model::EntitySignature;

/// Report title.
const TITLE: &str = "Organization Health Events Report";

/// Render format for resolved start times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Literal rendered when an event has no resolved start time.
pub const FALLBACK_START_TIME: &str = "unknown";

/// Render the aggregated report as plain text.
///
/// Pure function of the report content: groups are visited in event
/// arrival order and signatures in creation order, so identical input
/// yields byte-identical output.
pub fn render(report: &AggregatedReport, console_base: &str) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push('\n');

    if report.is_empty() {
        out.push_str("\nNo open or upcoming events.\n");
        return out;
    }

    for (key, signatures) in report.iter() {
        out.push('\n');
        out.push_str(&key.event_type_code);
        out.push('\n');
        out.push_str(&"-".repeat(key.event_type_code.len()));
        out.push('\n');

        out.push_str(&key.description);
        out.push('\n');

        let started = match key.start_time {
            Some(time) => time.format(TIME_FORMAT).to_string(),
            None => FALLBACK_START_TIME.to_string(),
        };
        out.push_str(&format!("Started: {}\n", started));

        out.push_str(&format!(
            "Link: {}/{}?arn={}\n",
            console_base,
            key.category.console_path(),
            key.arn
        ));

        for (signature, accounts) in signatures {
            out.push('\n');
            match signature {
                EntitySignature::NoEntity { region } => {
                    out.push_str(&format!("  Region: {}\n", region));
                }
                EntitySignature::Entities(entities) => {
                    out.push_str("  Entities:\n");
                    for entity in entities {
                        out.push_str(&format!("    - {}\n", entity));
                    }
                }
            }

            out.push_str("  Accounts:\n");
            for account in accounts {
                out.push_str(&format!(
                    "    - {} ({}) {}\n",
                    account.display_name, account.id, account.url
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::DateTime;
    use report_core::EventCategory;

    use super::*;
    use crate::model::{Enrichment, EntitySignature, GroupKey};

    const BASE: &str = "https://health.test";

    fn scenario_report() -> AggregatedReport {
        let mut names = HashMap::new();
        names.insert("A1".to_string(), "Prod".to_string());

        let key = GroupKey {
            event_type_code: "AWS_EC2_OPERATIONAL_ISSUE".to_string(),
            description: "Instance degradation".to_string(),
            start_time: DateTime::from_timestamp(1714564800, 0),
            arn: "E1".to_string(),
            category: EventCategory::Issue,
        };

        AggregatedReport::from_enrichments(
            vec![
                Enrichment {
                    key: key.clone(),
                    signature: EntitySignature::from_entities(vec![], Some("us-east-1")),
                    account_id: "A1".to_string(),
                },
                Enrichment {
                    key,
                    signature: EntitySignature::from_entities(
                        vec![
                            "i-123".to_string(),
                            "i-123".to_string(),
                            "i-999".to_string(),
                        ],
                        Some("us-east-1"),
                    ),
                    account_id: "A2".to_string(),
                },
            ],
            &names,
            BASE,
        )
    }

    #[test]
    fn test_render_fixture() {
        let expected = "\
Organization Health Events Report
=================================

AWS_EC2_OPERATIONAL_ISSUE
-------------------------
Instance degradation
Started: 2024-05-01 12:00:00
Link: https://health.test/open-issues?arn=E1

  Region: us-east-1
  Accounts:
    - Prod (A1) https://health.test/account/A1/events

  Entities:
    - i-123
    - i-999
  Accounts:
    - Unknown (A2) https://health.test/account/A2/events
";

        assert_eq!(render(&scenario_report(), BASE), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = scenario_report();
        assert_eq!(render(&report, BASE), render(&report, BASE));
    }

    #[test]
    fn test_render_empty_report() {
        let report = AggregatedReport::default();
        let rendered = render(&report, BASE);
        assert!(rendered.contains("No open or upcoming events."));
    }

    #[test]
    fn test_category_link_paths() {
        let names = HashMap::new();
        let cases = [
            (EventCategory::Issue, "open-issues"),
            (EventCategory::ScheduledChange, "scheduled-changes"),
            (EventCategory::AccountNotification, "other-notifications"),
        ];

        for (category, path) in cases {
            let report = AggregatedReport::from_enrichments(
                vec![Enrichment {
                    key: GroupKey {
                        event_type_code: "CODE".to_string(),
                        description: "d".to_string(),
                        start_time: None,
                        arn: "E1".to_string(),
                        category,
                    },
                    signature: EntitySignature::from_entities(vec![], None),
                    account_id: "A1".to_string(),
                }],
                &names,
                BASE,
            );

            let rendered = render(&report, BASE);
            assert!(
                rendered.contains(&format!("Link: {}/{}?arn=E1", BASE, path)),
                "missing {} link in:\n{}",
                path,
                rendered
            );
        }
    }

    #[test]
    fn test_render_fallback_start_time() {
        let names = HashMap::new();
        let report = AggregatedReport::from_enrichments(
            vec![Enrichment {
                key: GroupKey {
                    event_type_code: "CODE".to_string(),
                    description: "No description".to_string(),
                    start_time: None,
                    arn: "E1".to_string(),
                    category: EventCategory::AccountNotification,
                },
                signature: EntitySignature::from_entities(vec![], None),
                account_id: "A1".to_string(),
            }],
            &names,
            BASE,
        );

        let rendered = render(&report, BASE);
        assert!(rendered.contains("No description"));
        assert!(rendered.contains(&format!("Started: {}", FALLBACK_START_TIME)));
        assert!(rendered.contains("  Region: N/A"));
    }
}
