use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChartFrameProps {
    pub title: AttrValue,
    pub src: Option<String>,
    #[prop_or(300)]
    pub height: u32,
}

/// Embeds a backend-rendered chart page. Renders nothing without a source.
#[function_component(ChartFrame)]
pub fn chart_frame(props: &ChartFrameProps) -> Html {
    match &props.src {
        Some(src) => html! {
            <iframe class="chart-frame" title={props.title.clone()} src={src.clone()} height={props.height.to_string()} loading="lazy"></iframe>
        },
        None => html! {},
    }
}
