use web_sys::Element;
use yew::prelude::*;

use crate::viewport::VisibilityWatch;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Extra transition delay in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(move |_| {
            let on_visible = revealed.clone();
            let watch = node.cast::<Element>().and_then(|element| {
                VisibilityWatch::observe(&element, move || on_visible.set(true))
            });
            // Without an observer nothing would ever reveal it
            if watch.is_none() {
                revealed.set(true);
            }
            move || drop(watch)
        }, ());
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then(|| "visible"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
