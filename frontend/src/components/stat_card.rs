use yew::prelude::*;

use crate::icons::{icon_calendar, icon_target, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Wallet,
    Calendar,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::Calendar => icon_calendar(),
                        StatIcon::Target => icon_target(),
                    }
                }
            </div>
        </div>
    }
}
