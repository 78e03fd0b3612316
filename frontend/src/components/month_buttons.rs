use crate::model::Month;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthButtonsProps {
    pub on_select: Callback<Month>,
}

/// One list item per month, JAN through DEC, with a swatch in its quarter's
/// color.
#[function_component(MonthButtons)]
pub fn month_buttons(props: &MonthButtonsProps) -> Html {
    html! {
        <ul id="month-btns" class="flex flex-wrap gap-2">
            { for Month::ALL.iter().map(|month| {
                let month = *month;
                let on_select = props.on_select.clone();
                html! {
                    <li class="cursor-pointer flex flex-col items-center gap-1" onclick={Callback::from(move |_| on_select.emit(month))}>
                        <p class="text-xs font-bold text-white">{ month.label() }</p>
                        <div class="w-8 h-2 rounded" style={format!("background-color: {};", month.color())}></div>
                    </li>
                }
            }) }
        </ul>
    }
}
