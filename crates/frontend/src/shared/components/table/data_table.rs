use super::actions::{resolve_actions, RowAction};
use super::cell::{CellValue, TableRow};
use super::column::{validate_schema, Column, ColumnType};
use super::filter::filter_indices;
use super::format::{initials, render_cell_text, status_appearance, DEFAULT_EMPTY_MESSAGE};
use super::pagination::PAGE_SIZE_OPTIONS;
use super::state::TableState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;
use log::{debug, warn};

/// Filterable, paginated table over caller-owned rows.
///
/// The table owns only its filter and pagination state. Row actions are
/// reported through `on_action_click`; the caller decides what they do.
#[component]
pub fn DataTable<T>(
    /// Rows to display, in caller order
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Column schema
    columns: Vec<Column>,
    /// Action names; unknown names render no control
    #[prop(optional)]
    actions: Vec<String>,
    /// Receives `(action, row)` on an action click
    #[prop(optional)]
    on_action_click: Option<Callback<(RowAction, T)>>,
    /// Text of the "no results" row
    #[prop(optional, into)]
    empty_message: Option<String>,
    /// Page sizes offered in the selector
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    if let Err(e) = validate_schema(&columns) {
        warn!("table: {}", e);
    }

    let actions = resolve_actions(&actions);
    let has_actions = !actions.is_empty();
    let span = (columns.len() + usize::from(has_actions)).to_string();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
    let page_size_options = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    let state = RwSignal::new(TableState::new());

    let filters = Memo::new(move |_| state.with(|s| s.filters.clone()));
    let pagination = Memo::new(move |_| state.with(|s| s.pagination));

    // Page changes do not re-run the filter pass
    let filtered = Memo::new(move |_| {
        filters.with(|f| rows.with(|rows| columns.with_value(|cols| filter_indices(rows, cols, f))))
    });
    let visible = Memo::new(move |_| {
        let p = pagination.get();
        filtered.with(|idx| p.paginate(idx))
    });
    let total_filtered = Signal::derive(move || visible.with(|v| v.total_filtered));
    let total_pages = Signal::derive(move || visible.with(|v| v.total_pages));

    let go_to_page = move |page: usize| state.update(|s| s.set_page(page));
    let change_page_size = move |size: usize| {
        state.update(|s| {
            if let Err(e) = s.set_rows_per_page(size) {
                warn!("table: {}", e);
            }
        });
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|c| {
                let style = c
                    .width
                    .as_ref()
                    .map(|w| format!("width: {};", w))
                    .unwrap_or_default();
                view! { <th class="data-table__header" style=style>{c.label.clone()}</th> }
            })
            .collect_view()
    });

    let filter_cells = columns.with_value(|cols| {
        cols.iter()
            .cloned()
            .map(|c| view! { <th class="data-table__filter">{filter_control(c, state)}</th> })
            .collect_view()
    });

    let body = move || {
        let visible = visible.get();
        if visible.is_empty() {
            return view! {
                <tr class="data-table__empty">
                    <td colspan=span.clone()>{empty_message.clone()}</td>
                </tr>
            }
            .into_any();
        }

        let page_rows: Vec<T> = rows.with(|all| {
            visible
                .rows
                .iter()
                .filter_map(|&i| all.get(i).cloned())
                .collect()
        });
        let filler = visible.filler_rows;

        let data = page_rows
            .into_iter()
            .map(|row| render_row(row, columns, actions, on_action_click))
            .collect_view();
        let fillers = (0..filler)
            .map(|_| {
                view! {
                    <tr class="data-table__filler" aria-hidden="true">
                        <td colspan=span.clone()>"\u{00a0}"</td>
                    </tr>
                }
            })
            .collect_view();

        view! { {data} {fillers} }.into_any()
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <PaginationControls
                    current_page=Signal::derive(move || pagination.get().page)
                    total_pages=total_pages
                    total_count=total_filtered
                    page_size=Signal::derive(move || pagination.get().rows_per_page)
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                    page_size_options=page_size_options
                />
                {move || (!filters.with(|f| f.is_empty())).then(|| view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| state.update(TableState::clear_filters)
                    >
                        {icon("x")}
                        " Clear filters"
                    </button>
                })}
            </div>
            <div class="table-wrapper">
                <table class="table data-table__table">
                    <thead>
                        <tr>
                            {header_cells}
                            {has_actions.then(|| view! {
                                <th class="data-table__header data-table__header--actions">"Actions"</th>
                            })}
                        </tr>
                        <tr class="data-table__filter-row">
                            {filter_cells}
                            {has_actions.then(|| view! { <th class="data-table__filter"></th> })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
}

fn filter_control(column: Column, state: RwSignal<TableState>) -> AnyView {
    if !column.shows_filter() {
        return view! { <></> }.into_any();
    }

    let id = column.id.clone();
    let current = {
        let id = id.clone();
        move || state.with(|s| s.filters.get(&id).unwrap_or_default().to_string())
    };

    match column.column_type {
        ColumnType::Select => {
            let options = column.options.clone();
            view! {
                <select
                    class="data-table__filter-select"
                    prop:value=current
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_filter(&id, &value));
                    }
                >
                    <option value="">"All"</option>
                    {options
                        .into_iter()
                        .map(|o| {
                            let label = o.clone();
                            view! { <option value=o>{label}</option> }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        _ => {
            let placeholder = format!("Filter {}", column.label.to_lowercase());
            view! {
                <input
                    type="text"
                    class="data-table__filter-input"
                    placeholder=placeholder
                    prop:value=current
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_filter(&id, &value));
                    }
                />
            }
            .into_any()
        }
    }
}

fn render_row<T>(
    row: T,
    columns: StoredValue<Vec<Column>>,
    actions: StoredValue<Vec<RowAction>>,
    on_action_click: Option<Callback<(RowAction, T)>>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|c| {
                let value = row.cell(&c.id);
                view! { <td class="data-table__cell">{render_cell(c, &value)}</td> }
            })
            .collect_view()
    });

    let action_cell = actions.with_value(|acts| {
        if acts.is_empty() {
            return None;
        }
        let buttons = acts
            .iter()
            .copied()
            .map(|action| {
                let row = row.clone();
                view! {
                    <button
                        class="button button--icon data-table__action"
                        title=action.title()
                        on:click=move |_| {
                            debug!("table: {} on row {}", action.as_str(), row.row_key());
                            if let Some(cb) = on_action_click {
                                cb.run((action, row.clone()));
                            }
                        }
                    >
                        {icon(action.icon_name())}
                    </button>
                }
            })
            .collect_view();
        Some(view! { <td class="data-table__actions">{buttons}</td> })
    });

    view! {
        <tr class="data-table__row">
            {cells}
            {action_cell}
        </tr>
    }
}

fn render_cell(column: &Column, value: &CellValue) -> AnyView {
    match column.column_type {
        ColumnType::Status => {
            if value.is_empty() {
                return view! { <></> }.into_any();
            }
            let text = value.to_filter_string();
            let appearance = status_appearance(&text);
            view! {
                <Badge variant=appearance.tone.badge_variant().to_string() outlined=!appearance.filled>
                    {text}
                </Badge>
            }
            .into_any()
        }
        ColumnType::Avatar => {
            let text = value.to_filter_string();
            view! {
                <span class="data-table__avatar">
                    <span class="data-table__avatar-initials">{initials(&text)}</span>
                    <span>{text}</span>
                </span>
            }
            .into_any()
        }
        _ => render_cell_text(column, value).into_any(),
    }
}
