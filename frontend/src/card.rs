use yew::prelude::*;

use crate::format::format_brl;
use crate::icons::icon_target;
use crate::models::GoalProgress;

/// Display values for one goal-progress entry.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalCard {
    pub name: String,
    pub subtitle: String,
    pub target_label: String,
    pub due_label: String,
    pub progress_label: String,
    pub percentage: f64,
    pub remaining: f64,
}

impl GoalCard {
    pub fn percent_text(&self) -> String {
        format!("{}%", rounded_percent(self.percentage))
    }

    /// Not clamped: goals past their target overflow the bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", rounded_percent(self.percentage))
    }

    pub fn remaining_text(&self) -> String {
        format!("Faltam {}", format_brl(self.remaining))
    }
}

impl From<&GoalProgress> for GoalCard {
    fn from(entry: &GoalProgress) -> Self {
        let target = entry.target_value;
        let current = entry.current_value;
        let percentage = if target > 0.0 {
            current / target * 100.0
        } else {
            0.0
        };

        let subtitle = match &entry.category {
            Some(category) => format!("Meta de gastos: {}", category.name),
            None => "Meta geral de economia".to_string(),
        };
        let due_label = match entry.month {
            Some(month) => format!("até {}/{}", month, entry.year),
            None => format!("até {}", entry.year),
        };

        Self {
            name: entry.name.clone(),
            subtitle,
            target_label: format_brl(target),
            due_label,
            progress_label: format!("{} de {}", format_brl(current), format_brl(target)),
            percentage,
            remaining: target - current,
        }
    }
}

fn rounded_percent(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalCardViewProps {
    pub entry: GoalProgress,
}

#[function_component(GoalCardView)]
pub fn goal_card_view(props: &GoalCardViewProps) -> Html {
    let card = GoalCard::from(&props.entry);

    html! {
        <div class="meta-card bg-white rounded-[10px] shadow-sm border border-border p-5 space-y-3">
            <div class="meta-card-header flex items-start gap-3">
                <span class="meta-icon p-2 bg-[#eef4f9] rounded-[10px]">{ icon_target() }</span>
                <div class="flex-1">
                    <h3 class="font-bold text-[#173E63]">{ card.name.clone() }</h3>
                    <p class="text-xs text-muted-foreground">{ card.subtitle.clone() }</p>
                </div>
                <div class="text-right">
                    <span class="meta-target-value block font-bold text-[#1D617A]">{ card.target_label.clone() }</span>
                    <span class="meta-target-date block text-[11px] text-muted-foreground">{ card.due_label.clone() }</span>
                </div>
            </div>

            <div class="progress-labels flex items-center justify-between text-sm">
                <span class="text-muted-foreground">{ card.progress_label.clone() }</span>
                <span class="progress-percent font-bold text-[#173E63]">{ card.percent_text() }</span>
            </div>
            <div class="progress-bar-container h-2 w-full bg-secondary rounded-full">
                <div class="progress-bar-fill h-full bg-primary rounded-full" style={card.bar_style()}></div>
            </div>

            <div class="meta-card-footer text-xs text-muted-foreground">
                <span class="meta-remaining">{ card.remaining_text() }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryLabel;

    fn entry(target: f64, current: f64) -> GoalProgress {
        GoalProgress {
            name: "Viagem".to_string(),
            category: None,
            target_value: target,
            current_value: current,
            month: Some(10),
            year: 2025,
        }
    }

    #[test]
    fn zero_target_means_zero_percent() {
        let card = GoalCard::from(&entry(0.0, 250.0));
        assert_eq!(card.percentage, 0.0);
        assert_eq!(card.percent_text(), "0%");
        assert_eq!(card.bar_style(), "width: 0%;");
    }

    #[test]
    fn remaining_goes_negative_past_target() {
        let card = GoalCard::from(&entry(100.0, 150.0));
        assert_eq!(card.remaining, -50.0);
        assert_eq!(card.remaining_text(), "Faltam -R$\u{a0}50,00");
        assert_eq!(card.percent_text(), "150%");
        assert_eq!(card.bar_style(), "width: 150%;");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(GoalCard::from(&entry(8.0, 1.0)).percent_text(), "13%");
        assert_eq!(GoalCard::from(&entry(3.0, 1.0)).percent_text(), "33%");
        assert_eq!(GoalCard::from(&entry(3.0, 2.0)).percent_text(), "67%");
    }

    #[test]
    fn labels_for_monthly_goal_with_category() {
        let mut progress = entry(1000.0, 250.0);
        progress.category = Some(CategoryLabel {
            name: "Mercado".to_string(),
        });
        let card = GoalCard::from(&progress);

        assert_eq!(card.subtitle, "Meta de gastos: Mercado");
        assert_eq!(card.due_label, "até 10/2025");
        assert_eq!(card.target_label, "R$\u{a0}1.000,00");
        assert_eq!(card.progress_label, "R$\u{a0}250,00 de R$\u{a0}1.000,00");
        assert_eq!(card.remaining_text(), "Faltam R$\u{a0}750,00");
    }

    #[test]
    fn annual_goal_shows_only_year() {
        let mut progress = entry(10.0, 0.0);
        progress.month = None;
        let card = GoalCard::from(&progress);
        assert_eq!(card.subtitle, "Meta geral de economia");
        assert_eq!(card.due_label, "até 2025");
    }
}
