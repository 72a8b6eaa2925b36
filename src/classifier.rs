use regex::RegexBuilder;
use serde::Serialize;

use crate::chart::{Chart, ClassificationRule, MatchType};
use crate::models::{Category, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub normal_side: Side,
}

/// Names no rule claims are treated as current assets.
pub const UNMATCHED: Classification = Classification {
    category: Category::CurrentAsset,
    normal_side: Side::Debit,
};

fn matches(name: &str, pattern: &str, match_type: MatchType) -> bool {
    let name_lower = name.to_lowercase();
    let pat_lower = pattern.to_lowercase();
    match match_type {
        MatchType::Contains => name_lower.contains(&pat_lower),
        MatchType::StartsWith => name_lower.starts_with(&pat_lower),
        MatchType::Exact => name_lower.trim() == pat_lower.trim(),
        MatchType::Regex => RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(|re| re.is_match(name))
            .unwrap_or(false),
    }
}

fn rule_matches(rule: &ClassificationRule, name: &str) -> bool {
    rule.keywords
        .iter()
        .any(|keyword| matches(name, keyword, rule.match_type))
}

/// First rule (in chart order) whose keywords match the account name wins.
pub fn classify(chart: &Chart, account: &str) -> Classification {
    chart
        .rules
        .iter()
        .find(|rule| rule_matches(rule, account))
        .map(|rule| Classification {
            category: rule.category,
            normal_side: rule.normal_side,
        })
        .unwrap_or(UNMATCHED)
}

pub fn category_of(chart: &Chart, account: &str) -> Category {
    classify(chart, account).category
}
