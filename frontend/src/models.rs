//! Wire schemas for the savings-goals backend.
//!
//! Field names follow the backend's JSON (Portuguese, camelCase); the Rust
//! side uses English names and `serde(rename)` to bridge the two.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "MENSAL")]
    Monthly,
    #[serde(rename = "ANUAL")]
    Annual,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Monthly => "MENSAL",
            Period::Annual => "ANUAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MENSAL" => Some(Period::Monthly),
            "ANUAL" => Some(Period::Annual),
            _ => None,
        }
    }
}

/// Nested `{id}` reference used by the backend for relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Goal {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valorAlvo")]
    pub target_value: f64,
    /// Raw `periodo`; legacy rows may carry null or a value not known here.
    #[serde(rename = "periodo", default)]
    pub period: Option<String>,
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
}

impl Goal {
    pub fn is_active(&self, current_year: i32) -> bool {
        self.year >= current_year
    }

    pub fn period_kind(&self) -> Option<Period> {
        self.period.as_deref().and_then(Period::parse)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contribution {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "meta", default)]
    pub goal: Option<EntityRef>,
    #[serde(rename = "economia")]
    pub amount: f64,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
}

impl Contribution {
    /// Year and month read from the leading `YYYY-MM` of the date; the day
    /// part is not required.
    pub fn year_month(&self) -> Option<YearMonth> {
        let mut parts = self.date.as_deref()?.trim().split('-');
        let year = leading_number(parts.next()?)?;
        let month = leading_number(parts.next()?)?;
        Some(YearMonth {
            year: i32::try_from(year).ok()?,
            month: u32::try_from(month).ok()?,
        })
    }
}

fn leading_number(part: &str) -> Option<i64> {
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Category as embedded in a summary entry; only the name is displayed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryLabel {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GoalProgress {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<CategoryLabel>,
    #[serde(rename = "valorAlvo")]
    pub target_value: f64,
    #[serde(rename = "valorAtual", default)]
    pub current_value: f64,
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "ano")]
    pub year: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MainSummary {
    #[serde(rename = "progresso_metas_mes", default)]
    pub goal_progress: Option<Vec<GoalProgress>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valorAlvo")]
    pub target_value: f64,
    #[serde(rename = "periodo")]
    pub period: Period,
    #[serde(rename = "mes")]
    pub month: Option<u32>,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "categoria")]
    pub category: Option<EntityRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewContribution {
    #[serde(rename = "meta")]
    pub goal: EntityRef,
    #[serde(rename = "economia")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: String,
}
