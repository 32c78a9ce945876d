use std::rc::Rc;

use log::{error, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::behaviors::count_up::{AnimationTiming, CountUpTarget};
use crate::behaviors::ticker::{BrowserTicker, CountUpAnimation};
use crate::viewport::VisibilityWatch;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    /// Display label such as `"200+"` or `"100%"`.
    pub number: AttrValue,
    pub label: AttrValue,
    pub description: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let node = use_node_ref();
    let count = use_state_eq(|| 0u64);
    let revealed = use_state_eq(|| false);
    let target = CountUpTarget::parse(&props.number);

    {
        let node = node.clone();
        let setter = count.setter();
        let revealed = revealed.clone();
        let number = props.number.clone();
        use_effect_with_deps(move |target| {
            let mut animation = None;
            let mut watch = None;

            match target {
                Ok(target) => {
                    let on_change = Callback::from(move |value| setter.set(value));
                    let anim = Rc::new(CountUpAnimation::new(
                        target.value,
                        AnimationTiming::default(),
                        BrowserTicker,
                        on_change,
                    ));

                    let trigger = anim.clone();
                    let on_visible = revealed.clone();
                    watch = node.cast::<Element>().and_then(|element| {
                        VisibilityWatch::observe(&element, move || {
                            on_visible.set(true);
                            trigger.start();
                        })
                    });
                    if watch.is_none() {
                        revealed.set(true);
                        warn!("stat {:?} will not animate without an intersection observer", number);
                    }
                    animation = Some(anim);
                }
                Err(e) => {
                    error!("{}", e);
                    revealed.set(true);
                }
            }

            move || {
                drop(watch);
                drop(animation);
            }
        }, target.clone());
    }

    let shown = match &target {
        Ok(target) => target.render(*count),
        Err(_) => props.number.to_string(),
    };

    html! {
        <div ref={node} class={classes!("stat-card", "reveal", (*revealed).then(|| "visible"))}>
            <div class="stat-number">{shown}</div>
            <div class="stat-label">{props.label.clone()}</div>
            <p>{props.description.clone()}</p>
        </div>
    }
}
