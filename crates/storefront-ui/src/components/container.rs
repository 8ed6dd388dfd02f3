//! Responsive page container.
//!
//! # Design
//! - Stateless: width and padding come from `core::layout`.
//! - Consumer classes are appended, never replace the base set.

use yew::prelude::*;

use crate::core::layout::container_classes;

#[derive(Properties, PartialEq)]
pub(crate) struct ContainerProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub fluid: bool,
}

#[function_component(Container)]
pub(crate) fn container(props: &ContainerProps) -> Html {
    let classes = container_classes(props.fluid, &props.class);
    html! { <div class={classes}>{ for props.children.iter() }</div> }
}
