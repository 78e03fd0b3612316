use crate::model::ToggleLabel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewToggleProps {
    pub label: ToggleLabel,
    pub on_toggle: Callback<()>,
}

#[function_component(ViewToggle)]
pub fn view_toggle(props: &ViewToggleProps) -> Html {
    let on_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <button id="toggle-btn" type="button" onclick={on_click} class="px-4 py-2 rounded-lg bg-[#007F5F] text-white text-sm font-bold tracking-wide hover:bg-[#55A630] transition-colors">
            { props.label.text() }
        </button>
    }
}
