//! Sidebar with collapsible resource groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::list_key;
use crate::shared::icons::icon;
use contracts::domain::registry;
use contracts::shared::metadata::ResourceGroup;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    ResourceGroup::ALL
        .iter()
        .map(|group| MenuGroup {
            id: group.as_str(),
            label: group.label(),
            icon: group.icon(),
            items: registry::resources_in(*group)
                .map(|r| (r.key, r.list_name, r.icon))
                .collect(),
        })
        .filter(|g| !g.items.is_empty())
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec![ResourceGroup::MasterData.as_str().to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let group_id_for_show = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(key, label, icon_name)| {
                                    let tab_key = list_key(key);
                                    let tab_key_for_active = tab_key.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(tab_key_for_active.as_str())
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&tab_key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_groups_follow_resource_groups() {
        let groups = get_menu_groups();
        let ids: Vec<_> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["master_data", "transaction", "pricing"]);

        let pricing = &groups[2];
        let keys: Vec<_> = pricing.items.iter().map(|(k, _, _)| *k).collect();
        assert_eq!(keys, vec!["a021_buying_price", "a022_selling_price"]);

        // line items are reached from their header only
        assert!(groups
            .iter()
            .flat_map(|g| g.items.iter())
            .all(|(k, _, _)| !k.ends_with("_detail")));
    }
}
