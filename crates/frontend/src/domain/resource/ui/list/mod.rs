use crate::domain::resource::ui::details::model::{
    fetch_records, fetch_reference_options, labels_from_options,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, new_detail_key};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, ListRow, ReferenceLabels, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::{failure_message, use_auth};
use contracts::domain::common::RecordId;
use contracts::shared::form::FormRecord;
use contracts::shared::metadata::ResourceMeta;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::{Button, ButtonAppearance};

/// Visible rows: search filter first, then sort
pub fn visible_rows(
    meta: &ResourceMeta,
    records: &[FormRecord],
    labels: &ReferenceLabels,
    filter: &str,
    sort_field: &str,
    ascending: bool,
) -> Vec<ListRow> {
    let rows: Vec<ListRow> = records
        .iter()
        .map(|r| ListRow::build(meta, r, labels))
        .collect();
    let mut rows = filter_list(rows, filter);
    if !sort_field.is_empty() {
        sort_list(&mut rows, sort_field, ascending);
    }
    rows
}

/// Table of records of one resource.
///
/// With `parent_id` the list shows only the lines of that header and is
/// rendered compact, for embedding in the header's form.
#[component]
pub fn ResourceList(
    meta: &'static ResourceMeta,
    #[prop(optional, into)] parent_id: Option<String>,
) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();

    let records = RwSignal::new(Vec::<FormRecord>::new());
    let labels = RwSignal::new(ReferenceLabels::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let selected = RwSignal::new(HashSet::<String>::new());
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);

    let embedded = parent_id.is_some();
    let parent_id = StoredValue::new(parent_id);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            let parent = parent_id.get_value();
            match fetch_records(meta, parent.as_deref()).await {
                Ok(rows) => {
                    records.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", meta.endpoint, e);
                    let what = format!("load {}", meta.list_name.to_lowercase());
                    set_error.set(Some(failure_message(&what, &e, set_auth_state)));
                }
            }
            let (options, _) = fetch_reference_options(meta.list_fields()).await;
            labels.set(labels_from_options(&options));
            set_loading.set(false);
        });
    };

    // first load, then again after every save or delete anywhere
    Effect::new(move |_| {
        tabs_store.list_revision.track();
        load();
    });

    let rows = Memo::new(move |_| {
        records.with(|recs| {
            labels.with(|lbls| {
                visible_rows(
                    meta,
                    recs,
                    lbls,
                    &search.get(),
                    &sort_field.get(),
                    sort_ascending.get(),
                )
            })
        })
    });

    let open_record = move |id: RecordId| {
        tabs_store.open(&detail_key(meta.key, &id));
    };

    let open_new = move || {
        let parent = parent_id.get_value();
        tabs_store.open(&new_detail_key(meta.key, parent.as_deref()));
    };

    let toggle_select = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Delete selected {}? Count: {}",
                    meta.list_name.to_lowercase(),
                    ids.len()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            let mut failed = None;
            for id in ids {
                match http::delete(meta.endpoint, &id).await {
                    Ok(()) => log::info!("deleted {} {}", meta.endpoint, id),
                    Err(e) => {
                        log::error!("failed to delete {} {}: {}", meta.endpoint, id, e);
                        failed.get_or_insert(e);
                    }
                }
            }
            selected.set(HashSet::new());
            if let Some(e) = failed {
                let what = format!("delete {}", meta.element_name.to_lowercase());
                set_error.set(Some(failure_message(&what, &e, set_auth_state)));
            }
            tabs_store.notify_saved();
        });
    };

    let header = move || {
        let title = meta.list_name;
        let actions = view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| open_new()
            >
                {icon("plus")}
                " New"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| load()
                disabled=Signal::derive(move || loading.get())
            >
                {icon("refresh")}
                {move || if loading.get() { " Loading..." } else { " Refresh" }}
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| delete_selected()
                disabled=Signal::derive(move || selected.get().is_empty())
            >
                {icon("delete")}
                {move || format!(" Delete ({})", selected.get().len())}
            </Button>
        };
        if embedded {
            view! {
                <div class="page__section-header">
                    <h3 class="page__section-title">{title}</h3>
                    <div class="page__header-right">{actions}</div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">{title}</h1>
                    </div>
                    <div class="page__header-right">
                        <SearchInput
                            value=Signal::derive(move || search.get())
                            on_change=Callback::new(move |v: String| search.set(v))
                        />
                        {actions}
                    </div>
                </div>
            }
            .into_any()
        }
    };

    let table = move || {
        view! {
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || {
                                        let visible = rows.get();
                                        !visible.is_empty()
                                            && visible.iter().all(|r| selected.get().contains(&r.key()))
                                    }
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            let keys: HashSet<String> = rows
                                                .get_untracked()
                                                .iter()
                                                .map(ListRow::key)
                                                .filter(|k| !k.is_empty())
                                                .collect();
                                            selected.set(keys);
                                        } else {
                                            selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            {meta.list_fields().map(|field| {
                                let name = field.name;
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=create_sort_toggle(name, sort_field, sort_ascending)
                                    >
                                        {field.label}
                                        {move || get_sort_indicator(&sort_field.get(), name, sort_ascending.get())}
                                    </th>
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.cells.clone()
                            children=move |row: ListRow| {
                                let key = row.key();
                                let key_for_selected = key.clone();
                                let key_for_check = key.clone();
                                let key_for_toggle = key.clone();
                                let id = row.id.clone();
                                let filter = search.get_untracked();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected.get().contains(&key_for_selected)
                                        on:click=move |_| {
                                            if let Some(id) = id.clone() {
                                                open_record(id);
                                            }
                                        }
                                    >
                                        <td
                                            class="table__cell table__cell--checkbox"
                                            on:click=|ev| ev.stop_propagation()
                                        >
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || selected.get().contains(&key_for_check)
                                                on:change=move |ev| toggle_select(key_for_toggle.clone(), event_target_checked(&ev))
                                            />
                                        </td>
                                        {row.cells.into_iter().map(|(_, text)| view! {
                                            <td class="table__cell">
                                                {crate::shared::list_utils::highlight_matches(&text, &filter)}
                                            </td>
                                        }).collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.get().is_empty() && !loading.get()>
                    <div class="table__empty">"No records"</div>
                </Show>
            </div>
        }
    };

    if embedded {
        view! {
            <div class="page__section">
                {header}
                {table}
            </div>
        }
        .into_any()
    } else {
        view! {
            <PageFrame page_id=page_id(meta.key, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
                {header}
                <div class="page__content">
                    {table}
                </div>
            </PageFrame>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::registry;
    use serde_json::json;

    fn countries() -> Vec<FormRecord> {
        vec![
            FormRecord::from_value(json!({"id": 1, "name": "Indonesia", "code": "ID"})),
            FormRecord::from_value(json!({"id": 2, "name": "China", "code": "CN"})),
            FormRecord::from_value(json!({"id": 3, "name": "Vietnam", "code": "VN"})),
        ]
    }

    #[test]
    fn test_visible_rows_sorted() {
        let meta = registry::resource("a001_country").unwrap();
        let rows = visible_rows(meta, &countries(), &ReferenceLabels::new(), "", "name", true);
        let names: Vec<_> = rows.iter().map(|r| r.cell("name").to_string()).collect();
        assert_eq!(names, vec!["China", "Indonesia", "Vietnam"]);
    }

    #[test]
    fn test_visible_rows_filtered_keep_backend_order() {
        let meta = registry::resource("a001_country").unwrap();
        let rows = visible_rows(meta, &countries(), &ReferenceLabels::new(), "nam", "", true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key(), "3");

        let rows = visible_rows(meta, &countries(), &ReferenceLabels::new(), "", "", true);
        assert_eq!(rows[0].key(), "1");
    }
}
