//! Dashboard aggregation.
//!
//! The three backend reads are issued together and either all succeed or the
//! whole load fails; the stats are derived client-side from the full goal and
//! contribution lists rather than from the per-month summary.

use log::info;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::format::format_brl;
use crate::models::{Contribution, Goal, GoalProgress, MainSummary, YearMonth};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_saved: f64,
    pub total_saved_this_month: f64,
    pub active_goals: usize,
}

impl DashboardStats {
    pub fn compute_for(at: YearMonth, goals: &[Goal], contributions: &[Contribution]) -> Self {
        let active_goals = goals.iter().filter(|g| g.is_active(at.year)).count();
        let total_saved = contributions.iter().map(|c| c.amount).sum();
        let total_saved_this_month = contributions
            .iter()
            .filter(|c| c.year_month() == Some(at))
            .map(|c| c.amount)
            .sum();

        Self {
            total_saved,
            total_saved_this_month,
            active_goals,
        }
    }

    pub fn total_saved_label(&self) -> String {
        format_brl(self.total_saved)
    }

    pub fn this_month_label(&self) -> String {
        format_brl(self.total_saved_this_month)
    }

    pub fn active_goals_label(&self) -> String {
        format!("{} ativas", self.active_goals)
    }
}

/// State of the goal-card list.
#[derive(Clone, Debug, PartialEq)]
pub enum GoalList {
    Loading,
    Loaded(Vec<GoalProgress>),
    Failed,
}

pub const NO_ACTIVE_GOALS: &str = "Nenhuma meta ativa encontrada para este período.";
pub const GOALS_LOAD_ERROR: &str = "Erro ao carregar metas.";
pub const GOALS_LOADING: &str = "Carregando metas...";

impl GoalList {
    /// Message shown instead of cards, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GoalList::Loading => Some(GOALS_LOADING),
            GoalList::Loaded(entries) if entries.is_empty() => Some(NO_ACTIVE_GOALS),
            GoalList::Loaded(_) => None,
            GoalList::Failed => Some(GOALS_LOAD_ERROR),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub goal_progress: Vec<GoalProgress>,
}

impl DashboardSnapshot {
    pub fn build(
        at: YearMonth,
        summary: MainSummary,
        goals: &[Goal],
        contributions: &[Contribution],
    ) -> Self {
        Self {
            stats: DashboardStats::compute_for(at, goals, contributions),
            goal_progress: summary.goal_progress.unwrap_or_default(),
        }
    }
}

/// View-state changes produced by one dashboard load.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadOutcome {
    /// `None` leaves the stats on screen untouched.
    pub stats: Option<DashboardStats>,
    pub goals: GoalList,
}

pub fn apply_load(result: Result<DashboardSnapshot, ApiError>) -> LoadOutcome {
    match result {
        Ok(snapshot) => LoadOutcome {
            stats: Some(snapshot.stats),
            goals: GoalList::Loaded(snapshot.goal_progress),
        },
        Err(_) => LoadOutcome {
            stats: None,
            goals: GoalList::Failed,
        },
    }
}

pub async fn fetch_dashboard(client: &ApiClient) -> Result<DashboardSnapshot, ApiError> {
    fetch_dashboard_for(client, YearMonth::current()).await
}

pub async fn fetch_dashboard_for(
    client: &ApiClient,
    at: YearMonth,
) -> Result<DashboardSnapshot, ApiError> {
    let (summary, goals, contributions) = futures::try_join!(
        client.main_summary(at),
        client.goals(),
        client.contributions()
    )?;
    info!(
        "dashboard loaded for {}/{}: {} goals, {} contributions",
        at.month,
        at.year,
        goals.len(),
        contributions.len()
    );
    Ok(DashboardSnapshot::build(at, summary, &goals, &contributions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    fn goal(year: i32, month: Option<u32>) -> Goal {
        Goal {
            id: 1,
            name: "Meta".to_string(),
            target_value: 100.0,
            period: Some(
                if month.is_some() {
                    Period::Monthly
                } else {
                    Period::Annual
                }
                .as_str()
                .to_string(),
            ),
            month,
            year,
            category: None,
        }
    }

    fn contribution(amount: f64, date: Option<&str>) -> Contribution {
        Contribution {
            id: None,
            goal: None,
            amount,
            date: date.map(str::to_string),
        }
    }

    fn october_2025() -> YearMonth {
        YearMonth {
            year: 2025,
            month: 10,
        }
    }

    #[test]
    fn undated_contributions_count_only_toward_total() {
        let contributions = vec![
            contribution(100.0, Some("2025-10-01")),
            contribution(50.0, None),
        ];
        let stats = DashboardStats::compute_for(october_2025(), &[], &contributions);
        assert_eq!(stats.total_saved, 150.0);
        assert_eq!(stats.total_saved_this_month, 100.0);
    }

    #[test]
    fn this_month_matches_year_and_month() {
        let contributions = vec![
            contribution(10.0, Some("2025-10-31")),
            contribution(20.0, Some("2024-10-15")),
            contribution(40.0, Some("2025-09-30")),
            contribution(80.0, Some("not a date")),
        ];
        let stats = DashboardStats::compute_for(october_2025(), &[], &contributions);
        assert_eq!(stats.total_saved, 150.0);
        assert_eq!(stats.total_saved_this_month, 10.0);
    }

    #[test]
    fn active_goals_ignore_month() {
        let goals = vec![
            goal(2024, Some(12)),
            goal(2025, Some(1)),
            goal(2025, None),
            goal(2030, None),
        ];
        let stats = DashboardStats::compute_for(october_2025(), &goals, &[]);
        assert_eq!(stats.active_goals, 3);
        assert_eq!(stats.active_goals_label(), "3 ativas");
    }

    #[test]
    fn calendar_date_maps_to_one_based_month() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 10, 16).unwrap();
        let stats = DashboardStats::compute_for(
            YearMonth::from_date(today),
            &[goal(2025, None)],
            &[contribution(5.0, Some("2025-10-02"))],
        );
        assert_eq!(stats.active_goals, 1);
        assert_eq!(stats.total_saved_this_month, 5.0);
    }

    #[test]
    fn stat_labels_are_formatted_as_real() {
        let stats = DashboardStats {
            total_saved: 1500.0,
            total_saved_this_month: 0.0,
            active_goals: 0,
        };
        assert_eq!(stats.total_saved_label(), "R$\u{a0}1.500,00");
        assert_eq!(stats.this_month_label(), "R$\u{a0}0,00");
    }

    #[test]
    fn missing_summary_list_becomes_empty() {
        let snapshot = DashboardSnapshot::build(october_2025(), MainSummary::default(), &[], &[]);
        assert!(snapshot.goal_progress.is_empty());
        assert_eq!(
            GoalList::Loaded(snapshot.goal_progress).message(),
            Some(NO_ACTIVE_GOALS)
        );
    }

    #[test]
    fn successful_load_replaces_stats_and_cards() {
        let entry = GoalProgress {
            name: "Viagem".to_string(),
            category: None,
            target_value: 100.0,
            current_value: 40.0,
            month: Some(10),
            year: 2025,
        };
        let summary = MainSummary {
            goal_progress: Some(vec![entry.clone()]),
        };
        let snapshot = DashboardSnapshot::build(
            october_2025(),
            summary,
            &[goal(2025, Some(10))],
            &[contribution(40.0, Some("2025-10-03"))],
        );

        let outcome = apply_load(Ok(snapshot));
        let stats = outcome.stats.unwrap();
        assert_eq!(stats.active_goals, 1);
        assert_eq!(stats.total_saved, 40.0);
        assert_eq!(outcome.goals, GoalList::Loaded(vec![entry]));
    }

    #[test]
    fn failed_load_keeps_stats_and_shows_error() {
        let outcome = apply_load(Err(ApiError::Status {
            url: "http://localhost:8080/economias".to_string(),
            status: 503,
        }));
        assert_eq!(outcome.stats, None);
        assert_eq!(outcome.goals, GoalList::Failed);
        assert_eq!(outcome.goals.message(), Some(GOALS_LOAD_ERROR));
    }

    #[test]
    fn goal_list_messages() {
        assert_eq!(GoalList::Failed.message(), Some("Erro ao carregar metas."));
        assert_eq!(GoalList::Loading.message(), Some(GOALS_LOADING));
        let entry = GoalProgress {
            name: "Viagem".to_string(),
            category: None,
            target_value: 10.0,
            current_value: 1.0,
            month: None,
            year: 2025,
        };
        assert_eq!(GoalList::Loaded(vec![entry]).message(), None);
    }
}
