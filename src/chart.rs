//! Chart of accounts: the ordered keyword rules that classify free-text
//! account names, plus the account names the closing process posts to.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Category, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    #[default]
    Contains,
    StartsWith,
    Exact,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub match_type: MatchType,
    pub category: Category,
    pub normal_side: Side,
}

impl ClassificationRule {
    pub fn new(keywords: &[&str], category: Category, normal_side: Side) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            match_type: MatchType::Contains,
            category,
            normal_side,
        }
    }

    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default = "default_rules")]
    pub rules: Vec<ClassificationRule>,
    #[serde(default = "default_income_summary_account")]
    pub income_summary_account: String,
    #[serde(default = "default_equity_account")]
    pub default_equity_account: String,
    #[serde(default = "default_equity_reference")]
    pub default_equity_reference: String,
}

fn default_income_summary_account() -> String {
    "Ikhtisar Laba Rugi".to_string()
}

fn default_equity_account() -> String {
    "Modal".to_string()
}

fn default_equity_reference() -> String {
    "300".to_string()
}

// Order matters: a name like "Beban Penyusutan Peralatan" must hit the
// expense rule before the fixed-asset one.
fn default_rules() -> Vec<ClassificationRule> {
    use Category::*;
    vec![
        ClassificationRule::new(&["ikhtisar", "income summary"], IncomeSummary, Side::Credit),
        ClassificationRule::new(&["prive", "drawing"], Drawings, Side::Debit),
        // Whole word only, so "Piutang" falls through to the asset rule.
        ClassificationRule::new(&[r"\bh?utang\b"], Liability, Side::Credit)
            .with_match_type(MatchType::Regex),
        ClassificationRule::new(&["kewajiban", "debt", "payable"], Liability, Side::Credit),
        ClassificationRule::new(&["modal", "ekuitas", "equity", "capital"], Equity, Side::Credit),
        ClassificationRule::new(&["pendapatan", "revenue"], Revenue, Side::Credit),
        ClassificationRule::new(&["beban", "biaya", "expense"], Expense, Side::Debit),
        ClassificationRule::new(&["akumulasi", "accumulated"], FixedAsset, Side::Credit),
        ClassificationRule::new(
            &[
                "peralatan", "kendaraan", "bangunan", "tanah", "equipment", "vehicle", "building",
                "land",
            ],
            FixedAsset,
            Side::Debit,
        ),
        ClassificationRule::new(
            &[
                "kas", "piutang", "perlengkapan", "persediaan", "cash", "receivable", "supplies",
                "inventory",
            ],
            CurrentAsset,
            Side::Debit,
        ),
    ]
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            income_summary_account: default_income_summary_account(),
            default_equity_account: default_equity_account(),
            default_equity_reference: default_equity_reference(),
        }
    }
}

impl Chart {
    /// Compile every regex rule once so a bad pattern surfaces at load time
    /// instead of silently never matching.
    pub fn validate(&self) -> Result<()> {
        for rule in self.rules.iter().filter(|r| r.match_type == MatchType::Regex) {
            for pattern in &rule.keywords {
                RegexBuilder::new(pattern).case_insensitive(true).build()?;
            }
        }
        Ok(())
    }
}
