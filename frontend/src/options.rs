//! Reference data for the two modal selects (categories and goals).
//!
//! Loading never fails from the caller's point of view: errors are logged
//! and replaced by a placeholder option.

use log::{debug, error};

use crate::api::ApiClient;
use crate::models::{Category, Goal, Period};

pub const NO_CATEGORY: &str = "Nenhuma (Meta Geral)";
pub const SELECT_GOAL: &str = "Selecione uma meta";
pub const NO_GOALS_YET: &str = "Nenhuma meta criada";
pub const LOAD_ERROR: &str = "Erro ao carregar";
pub const LOADING: &str = "Carregando...";

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option with an empty value, so selecting it counts as "nothing selected".
    pub fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectOptions {
    Loading,
    Ready(Vec<SelectOption>),
}

impl SelectOptions {
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            SelectOptions::Loading => vec![SelectOption::placeholder(LOADING)],
            SelectOptions::Ready(options) => options.clone(),
        }
    }
}

pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(SelectOption::placeholder(NO_CATEGORY));
    options.extend(categories.iter().map(|category| {
        SelectOption::new(
            category.id.to_string(),
            format!("{} ({})", category.name, category.kind),
        )
    }));
    options
}

/// Monthly goals show `month/year`; any other period, known or not, shows
/// only the year.
pub fn goal_label(goal: &Goal) -> String {
    match (goal.period_kind(), goal.month, goal.period.as_deref()) {
        (Some(Period::Monthly), Some(month), _) => format!(
            "{} ({} - {}/{})",
            goal.name,
            Period::Monthly.as_str(),
            month,
            goal.year
        ),
        (_, _, Some(period)) => format!("{} ({} - {})", goal.name, period, goal.year),
        (_, _, None) => format!("{} ({})", goal.name, goal.year),
    }
}

pub fn goal_options(goals: &[Goal]) -> Vec<SelectOption> {
    if goals.is_empty() {
        return vec![SelectOption::placeholder(NO_GOALS_YET)];
    }
    let mut options = Vec::with_capacity(goals.len() + 1);
    options.push(SelectOption::placeholder(SELECT_GOAL));
    options.extend(
        goals
            .iter()
            .map(|goal| SelectOption::new(goal.id.to_string(), goal_label(goal))),
    );
    options
}

pub async fn load_categories(client: &ApiClient) -> Vec<SelectOption> {
    match client.categories().await {
        Ok(categories) => {
            debug!("loaded {} categories", categories.len());
            category_options(&categories)
        }
        Err(err) => {
            error!("failed to load categories: {}", err);
            vec![SelectOption::placeholder(LOAD_ERROR)]
        }
    }
}

pub async fn load_goals_for_select(client: &ApiClient) -> Vec<SelectOption> {
    match client.goals().await {
        Ok(goals) => {
            debug!("loaded {} goals for select", goals.len());
            goal_options(&goals)
        }
        Err(err) => {
            error!("failed to load goals for select: {}", err);
            vec![SelectOption::placeholder(LOAD_ERROR)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(id: i64, name: &str, period: Period, month: Option<u32>, year: i32) -> Goal {
        Goal {
            id,
            name: name.to_string(),
            target_value: 100.0,
            period: Some(period.as_str().to_string()),
            month,
            year,
            category: None,
        }
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn categories_start_with_general_goal_option() {
        let options = category_options(&[Category {
            id: 1,
            name: "Food".to_string(),
            kind: "EXPENSE".to_string(),
        }]);
        assert_eq!(labels(&options), vec!["Nenhuma (Meta Geral)", "Food (EXPENSE)"]);
        assert_eq!(options[0].value, "");
        assert_eq!(options[1].value, "1");
    }

    #[test]
    fn goal_labels_depend_on_period() {
        let options = goal_options(&[
            goal(5, "Trip", Period::Monthly, Some(10), 2025),
            goal(6, "Casa", Period::Annual, None, 2026),
        ]);
        assert_eq!(
            labels(&options),
            vec!["Selecione uma meta", "Trip (MENSAL - 10/2025)", "Casa (ANUAL - 2026)"]
        );
        assert_eq!(options[1].value, "5");
    }

    #[test]
    fn monthly_goal_without_month_uses_year_only() {
        let label = goal_label(&goal(1, "Reserva", Period::Monthly, None, 2025));
        assert_eq!(label, "Reserva (MENSAL - 2025)");
    }

    #[test]
    fn unknown_or_missing_period_gets_year_only_label() {
        let mut semestral = goal(3, "Semestre", Period::Annual, Some(6), 2025);
        semestral.period = Some("SEMESTRAL".to_string());
        let mut legacy = goal(4, "Antiga", Period::Annual, None, 2024);
        legacy.period = None;

        let options = goal_options(&[semestral, legacy]);
        assert_eq!(
            labels(&options),
            vec!["Selecione uma meta", "Semestre (SEMESTRAL - 2025)", "Antiga (2024)"]
        );
    }

    #[test]
    fn empty_goal_list_has_distinct_placeholder() {
        let options = goal_options(&[]);
        assert_eq!(labels(&options), vec!["Nenhuma meta criada"]);
        assert_ne!(options[0].label, LOAD_ERROR);
    }

    #[test]
    fn loading_state_shows_single_placeholder() {
        assert_eq!(
            SelectOptions::Loading.options(),
            vec![SelectOption::placeholder(LOADING)]
        );
    }
}
