use otui_config::TableDefaults;
use otui_core::table::{CellContent, Column, RowClass, TableRow, empty_colspan};
use yew::prelude::*;

use crate::defaults::use_ui_defaults;
use crate::foundations::{merge_classes, optional_class};

/// Props for [`Table`].
#[derive(Properties, PartialEq)]
pub struct TableProps<T: PartialEq + 'static> {
    /// Column definitions in display order.
    pub columns: Vec<Column<T, Html>>,
    /// Rows to render.
    pub data: Vec<T>,
    /// Extra classes on the wrapping element.
    #[prop_or_default]
    pub class: Classes,
    /// Classes on the `<table>` element.
    #[prop_or_default]
    pub table_class: Classes,
    /// Classes on `<thead>`.
    #[prop_or_default]
    pub thead_class: Classes,
    /// Classes on `<tbody>`.
    #[prop_or_default]
    pub tbody_class: Classes,
    /// Per-row class.
    #[prop_or_default]
    pub row_class: RowClass<T>,
    /// Invoked with the row and its index when a row is clicked.
    #[prop_or_default]
    pub on_row_click: Option<Callback<(T, usize)>>,
    /// Empty-state content; falls back to the configured message.
    #[prop_or_default]
    pub empty_message: Option<Html>,
}

fn cell_html(content: CellContent<Html>) -> Html {
    match content {
        CellContent::Rendered(html) => html,
        CellContent::Text(text) => html! { {text} },
        CellContent::Empty => Html::default(),
    }
}

fn empty_state(message: Option<&Html>, defaults: &TableDefaults) -> Html {
    message
        .cloned()
        .unwrap_or_else(|| html! { {defaults.empty_message.clone()} })
}

/// Data table driven by column definitions.
///
/// Cells come from each column's render function, its accessor, or nothing.
/// Rows become clickable when `on_row_click` is set.
#[function_component(Table)]
pub fn table<T>(props: &TableProps<T>) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let defaults = use_ui_defaults();
    let columns = &props.columns;

    let body = if props.data.is_empty() {
        html! {
            <tr>
                <td colspan={empty_colspan(columns).to_string()} style="text-align: center">
                    {empty_state(props.empty_message.as_ref(), &defaults.table)}
                </td>
            </tr>
        }
    } else {
        props
            .data
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let onclick = props.on_row_click.clone().map(|on_row_click| {
                    let row = row.clone();
                    Callback::from(move |_: MouseEvent| on_row_click.emit((row.clone(), index)))
                });
                let style = onclick.is_some().then_some("cursor: pointer");
                html! {
                    <tr
                        key={index}
                        class={optional_class(props.row_class.resolve(row, index).as_deref())}
                        style={style}
                        onclick={onclick}
                    >
                        {for columns.iter().map(|column| html! {
                            <td key={column.key.clone()} class={optional_class(column.cell_class.as_deref())}>
                                {cell_html(column.resolve(row, index))}
                            </td>
                        })}
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class={merge_classes("table", &props.class)}>
            <table class={props.table_class.clone()}>
                <thead class={props.thead_class.clone()}>
                    <tr>
                        {for columns.iter().map(|column| html! {
                            <th key={column.key.clone()} class={optional_class(column.header_class.as_deref())}>
                                {column.header.clone()}
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class={props.tbody_class.clone()}>
                    {body}
                </tbody>
            </table>
        </div>
    }
}
