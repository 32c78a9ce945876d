use yew::prelude::*;

use super::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct ProblemCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    /// One of `red`, `orange`, `yellow`.
    pub tone: AttrValue,
}

#[function_component(ProblemCard)]
pub fn problem_card(props: &ProblemCardProps) -> Html {
    html! {
        <Reveal class="problem-card">
            <div class={classes!("problem-icon", format!("tone-{}", props.tone))}>{"✕"}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub badge: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
            <div class="feature-badge">
                <span class="dot"></span>
                <span>{props.badge.clone()}</span>
            </div>
        </div>
    }
}
