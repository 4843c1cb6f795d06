use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AttrValue,
}

/// Colour-coded order status
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let tone = match props.status.to_ascii_lowercase().as_str() {
        "new" | "received" => "bg-blue-100 text-blue-800",
        "shipped" | "delivered" => "bg-emerald-100 text-emerald-800",
        "cancelled" | "canceled" => "bg-red-100 text-red-800",
        "" => "bg-gray-100 text-gray-500",
        _ => "bg-amber-100 text-amber-800",
    };
    let label = if props.status.is_empty() {
        AttrValue::from("unknown")
    } else {
        props.status.clone()
    };

    html! {
        <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-medium", tone)}>
            {label}
        </span>
    }
}
