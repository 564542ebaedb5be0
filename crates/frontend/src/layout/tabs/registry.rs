//! Tab key to view mapping. Every page reachable from a tab is wired here.

use super::tab_key::{parse_tab_key, TabTarget};
use crate::domain::a017_cx_invoice::ui::details::CxInvoiceLineDetails;
use crate::domain::a021_buying_price::ui::details::BuyingPriceLineDetails;
use crate::domain::a022_selling_price::ui::details::SellingPriceLineDetails;
use crate::domain::resource::ui::details::ResourceDetails;
use crate::domain::resource::ui::list::ResourceList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::registry;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// `tabs_store` is used by detail pages to close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some(target) = parse_tab_key(key) else {
        return not_found(key);
    };
    let Some(meta) = registry::resource(target.resource()) else {
        return not_found(key);
    };

    let (id, parent_id) = match target {
        TabTarget::List { .. } => {
            return view! { <ResourceList meta=meta /> }.into_any();
        }
        TabTarget::Existing { id, .. } => (Some(id), None),
        TabTarget::New { parent_id, .. } => (None, parent_id),
    };

    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));
    let key_for_saved = key.to_string();
    let on_saved = Callback::new(move |_: ()| {
        tabs_store.notify_saved();
        tabs_store.close_tab(&key_for_saved);
    });

    match meta.key {
        "a021_buying_price_detail" => view! {
            <BuyingPriceLineDetails id=id parent_id=parent_id on_saved=on_saved on_close=on_close />
        }
        .into_any(),
        "a017_cx_invoice_detail" => view! {
            <CxInvoiceLineDetails id=id parent_id=parent_id on_saved=on_saved on_close=on_close />
        }
        .into_any(),
        "a022_selling_price_detail" => view! {
            <SellingPriceLineDetails id=id parent_id=parent_id on_saved=on_saved on_close=on_close />
        }
        .into_any(),
        _ => view! {
            <ResourceDetails
                meta=meta
                id=id
                parent_id=parent_id
                tab_key=key.to_string()
                on_saved=on_saved
                on_close=on_close
            />
        }
        .into_any(),
    }
}

fn not_found(key: &str) -> AnyView {
    log!("Unknown tab key: {}", key);
    view! { <div class="placeholder">{"Page not found"}</div> }.into_any()
}
