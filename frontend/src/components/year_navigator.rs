use super::chart_frame::ChartFrame;
use super::icons::{icon_chevron_left, icon_chevron_right};
use crate::config::ChartSources;
use crate::model::{DonutChart, Direction, Year};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct YearNavigatorProps {
    pub year: Year,
    pub charts: Vec<DonutChart>,
    pub sources: ChartSources,
    pub on_navigate: Callback<Direction>,
}

/// Donut charts for every year with left/right controls. Only the active
/// chart carries the `active` class.
#[function_component(YearNavigator)]
pub fn year_navigator(props: &YearNavigatorProps) -> Html {
    let button = |direction: Direction| {
        let on_navigate = props.on_navigate.clone();
        let icon = match direction {
            Direction::Left => icon_chevron_left(),
            Direction::Right => icon_chevron_right(),
        };
        html! {
            <button
                type="button"
                id={direction.button_id()}
                class="toggle-year-btns p-2 rounded-full text-white hover:bg-white/10 transition-colors"
                onclick={Callback::from(move |_| on_navigate.emit(direction))}
            >
                { icon }
            </button>
        }
    };

    html! {
        <div class="flex flex-col items-center gap-2">
            <div class="flex items-center gap-4">
                { button(Direction::Left) }
                <span id="year-value" class="text-xl font-black text-white">{ props.year.to_string() }</span>
                { button(Direction::Right) }
            </div>
            { for props.charts.iter().map(|chart| html! {
                <div id={format!("chart-{}", chart.year)} class={classes!("donut-chart", chart.active.then_some("active"))}>
                    <ChartFrame
                        title={format!("Accidents per quarter, {}", chart.year)}
                        src={props.sources.donut(chart.year).map(str::to_string)}
                    />
                </div>
            }) }
        </div>
    }
}
