use common::converters::{records_to_rows, table_headers};
use common::{PriceRecord, Symbol};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: Symbol,
    /// Rows of the current page, newest first.
    pub rows: Vec<PriceRecord>,
    pub loading: bool,
    /// Whether the filtered set is empty.
    pub empty: bool,
}

/// Row key. Dates are not guaranteed unique, so the position is included.
fn row_key(index: usize, date: &str) -> String {
    format!("{}-{}", index, date)
}

#[function_component(HistoryTable)]
pub fn history_table(props: &Props) -> Html {
    let headers = table_headers(props.symbol);
    let colspan = headers.len().to_string();

    let body = if props.loading {
        html! {
            <tr><td colspan={colspan} class="text-center py-8">{"Loading Data..."}</td></tr>
        }
    } else if props.empty {
        html! {
            <tr>
                <td colspan={colspan} class="text-center py-8 text-base-content/50">
                    {"No data found for selected range"}
                </td>
            </tr>
        }
    } else {
        html! {
            <>
            { for records_to_rows(props.symbol, &props.rows).into_iter().enumerate().map(|(index, row)| {
                let direction = if row.is_up { "text-success" } else { "text-error" };
                html! {
                    <tr key={row_key(index, &row.date)} class="hover">
                        <td class="font-mono text-base-content/60">{ &row.date }</td>
                        <td class={classes!("font-bold", direction)}>{ &row.close }</td>
                        <td>{ &row.open }</td>
                        <td>{ &row.high }</td>
                        <td>{ &row.low }</td>
                        {if let Some(change) = &row.change {
                            let arrow = if row.is_up { "fas fa-arrow-up" } else { "fas fa-arrow-down" };
                            html! {
                                <td class={classes!("flex", "items-center", "gap-1", direction)}>
                                    <i class={classes!(arrow, "text-xs")}></i>
                                    { change }
                                </td>
                            }
                        } else {
                            html! {}
                        }}
                    </tr>
                }
            })}
            </>
        }
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        { for headers.iter().map(|h| html! { <th>{ *h }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { body }
                </tbody>
            </table>
        </div>
    }
}
