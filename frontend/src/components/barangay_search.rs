use super::icons::icon_search;
use crate::model::SearchDraft;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarangaySearchProps {
    pub barangays: Vec<String>,
    pub draft: SearchDraft,
    pub on_barangay_change: Callback<String>,
    pub on_hour_input: Callback<String>,
    pub on_search: Callback<()>,
}

#[function_component(BarangaySearch)]
pub fn barangay_search(props: &BarangaySearchProps) -> Html {
    let on_barangay_change = {
        let on_barangay_change = props.on_barangay_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            on_barangay_change.emit(input.value());
        })
    };
    let on_barangay_input = {
        let on_barangay_change = props.on_barangay_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_barangay_change.emit(input.value());
        })
    };
    let on_hour_input = {
        let on_hour_input = props.on_hour_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_hour_input.emit(input.value());
        })
    };
    let on_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |_| on_search.emit(()))
    };

    html! {
        <div class="flex flex-wrap items-end gap-3">
            <div>
                <label for="brgy" class="block text-[10px] font-bold tracking-widest text-slate-300 mb-1">{"BARANGAY"}</label>
                if props.barangays.is_empty() {
                    <input id="brgy" type="text" placeholder="Barangay name" value={props.draft.barangay.clone()} oninput={on_barangay_input} class="px-3 py-2 rounded-lg bg-white text-[#00264d] text-sm" />
                } else {
                    <select id="brgy" onchange={on_barangay_change} class="px-3 py-2 rounded-lg bg-white text-[#00264d] text-sm">
                        <option value="" selected={props.draft.barangay.is_empty()}>{"Select barangay"}</option>
                        { for props.barangays.iter().map(|name| html! {
                            <option value={name.clone()} selected={*name == props.draft.barangay}>{ name.clone() }</option>
                        }) }
                    </select>
                }
            </div>
            <div>
                <label for="hour" class="block text-[10px] font-bold tracking-widest text-slate-300 mb-1">{"HOUR"}</label>
                <input id="hour" type="number" min="1" max="24" value={props.draft.hour.clone()} oninput={on_hour_input} class="w-24 px-3 py-2 rounded-lg bg-white text-[#00264d] text-sm" />
            </div>
            <button id="search" type="button" onclick={on_search} class="flex items-center gap-2 px-4 py-2 rounded-lg bg-[#EBEB55] text-[#00264d] text-sm font-bold">
                { icon_search() }
                <span>{"SEARCH"}</span>
            </button>
        </div>
    }
}
