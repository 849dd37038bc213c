use yew::prelude::*;

use crate::icons::IconPrefix;
use crate::vocabulary::{IconGlyph, IconRenderer, IconStyle};

/// Props for the component bound under `fa-icon`.
#[derive(Properties, PartialEq)]
pub(crate) struct FaIconProps {
    /// Icon identifier (`plus`, `far:lightbulb`).
    pub(crate) icon: AttrValue,
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Accessible title; untitled icons are hidden from assistive tech.
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) size: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) fixed_width: bool,
    #[prop_or_default]
    pub(crate) spin: bool,
}

/// Draws a registered icon through the renderer provided by the root.
#[function_component(FaIcon)]
pub(crate) fn fa_icon(props: &FaIconProps) -> Html {
    let glyph = use_context::<IconRenderer>()
        .map_or(IconGlyph::Placeholder, |renderer| renderer.resolve(&props.icon));
    let style = IconStyle {
        size: props.size.as_ref().map(ToString::to_string),
        fixed_width: props.fixed_width,
        spin: props.spin,
    };
    let mut classes = Classes::new();
    for class in glyph.css_classes(&style) {
        classes.push(class);
    }
    classes.extend(props.class.clone());

    let IconGlyph::Icon(icon) = glyph else {
        return html! { <svg class={classes} viewBox="0 0 24 24" aria-hidden="true" /> };
    };
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let fill = match icon.prefix() {
        IconPrefix::Solid => "currentColor",
        IconPrefix::Regular => "none",
    };
    html! {
        <svg
            class={classes}
            viewBox={icon.view_box()}
            fill={fill}
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            data-prefix={icon.prefix().as_str()}
            data-icon={icon.glyph_name()}
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            <path d={icon.path()} />
        </svg>
    }
}
