//! Result Table Component
//!
//! Renders a list/search result. An empty result still shows its header row
//! and is marked with the `empty` class.

use leptos::prelude::*;

use crate::results::ResultTable;

#[component]
pub fn ResultTableView(
    id: &'static str,
    #[prop(into)] table: Signal<Option<ResultTable>>,
) -> impl IntoView {
    view! {
        <div id=id class="results">
            {move || table.get().map(|table| {
                let empty = table.is_empty();
                view! {
                    <table class="table-striped" class:empty=empty>
                        <thead>
                            <tr>
                                {table
                                    .columns
                                    .iter()
                                    .map(|column| view! { <th>{*column}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {table.rows.into_iter().map(|row| view! {
                                <tr>
                                    {row
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}
