use crate::models::{EntityRef, NewContribution, NewGoal, Period};

/// Client-side validation failures. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Por favor, informe o nome da meta.")]
    MissingName,
    #[error("Por favor, informe um valor alvo válido.")]
    InvalidTarget,
    #[error("Por favor, selecione um período válido.")]
    InvalidPeriod,
    #[error("Por favor, informe um mês entre 1 e 12.")]
    InvalidMonth,
    #[error("Por favor, informe um ano válido.")]
    InvalidYear,
    #[error("Por favor, selecione uma meta.")]
    MissingGoal,
    #[error("Por favor, selecione uma data para a economia.")]
    MissingDate,
    #[error("Por favor, informe um valor de economia válido.")]
    InvalidAmount,
}

pub const GOAL_SAVE_FAILED: &str = "Não foi possível salvar a meta. Verifique o console.";
pub const CONTRIBUTION_SAVE_FAILED: &str =
    "Não foi possível salvar a economia. Verifique o console.";

/// What a modal does once its POST has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Close the modal and reload the dashboard.
    Saved,
    /// Alert the user; the modal stays open and nothing is reloaded.
    Failed { alert: &'static str },
}

impl SubmitOutcome {
    pub fn from_result<T, E>(result: &Result<T, E>, failure_alert: &'static str) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Saved,
            Err(_) => SubmitOutcome::Failed {
                alert: failure_alert,
            },
        }
    }

    pub fn closes_modal(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }

    pub fn reloads_dashboard(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }

    pub fn alert(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Saved => None,
            SubmitOutcome::Failed { alert } => Some(*alert),
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raw field values of the "Nova Meta" form.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalForm {
    pub name: String,
    pub target_value: String,
    pub period: String,
    pub month: String,
    pub year: String,
    pub category_id: String,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            target_value: String::new(),
            period: Period::Annual.as_str().to_string(),
            month: String::new(),
            year: String::new(),
            category_id: String::new(),
        }
    }
}

impl GoalForm {
    /// The month field is only relevant for monthly goals.
    pub fn shows_month(&self) -> bool {
        Period::parse(&self.period) == Some(Period::Monthly)
    }

    pub fn to_request(&self) -> Result<NewGoal, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let target_value = parse_amount(&self.target_value).ok_or(FormError::InvalidTarget)?;
        let period = Period::parse(&self.period).ok_or(FormError::InvalidPeriod)?;
        let month = match period {
            Period::Monthly => Some(
                self.month
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|m| (1..=12).contains(m))
                    .ok_or(FormError::InvalidMonth)?,
            ),
            Period::Annual => None,
        };
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear)?;
        let category = self
            .category_id
            .trim()
            .parse::<i64>()
            .ok()
            .map(|id| EntityRef { id });

        Ok(NewGoal {
            name: name.to_string(),
            target_value,
            period,
            month,
            year,
            category,
        })
    }
}

/// Raw field values of the "Adicionar Economia" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContributionForm {
    pub goal_id: String,
    pub amount: String,
    pub date: String,
}

impl ContributionForm {
    pub fn to_request(&self) -> Result<NewContribution, FormError> {
        let goal_id = self
            .goal_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::MissingGoal)?;
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FormError::MissingDate);
        }
        let amount = parse_amount(&self.amount).ok_or(FormError::InvalidAmount)?;

        Ok(NewContribution {
            goal: EntityRef { id: goal_id },
            amount,
            date: date.to_string(),
        })
    }
}
