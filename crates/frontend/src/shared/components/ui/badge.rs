use contracts::enums::InvoiceStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for an invoice status
pub fn status_variant(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Sent => "primary",
        InvoiceStatus::Paid => "success",
        InvoiceStatus::Cancelled => "error",
    }
}

/// Invoice status rendered as a coloured badge
#[component]
pub fn InvoiceStatusBadge(status: InvoiceStatus) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status)>
            {status.display_name()}
        </Badge>
    }
}
