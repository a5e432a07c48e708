use crate::dashboards::d404_resource_inventory::view_model::{GroupBody, GroupView};
use crate::shared::components::table::TableCellText;
use leptos::prelude::*;
use thaw::*;

/// One group: heading plus either a table or the no-data placeholder
#[component]
pub fn GroupTable(group: GroupView, #[prop(into)] no_data_text: String) -> impl IntoView {
    let body = match group.body {
        GroupBody::NoData => view! {
            <p class="d404-no-data">{no_data_text}</p>
        }
        .into_any(),
        GroupBody::Table(table) => {
            let header = table
                .columns
                .into_iter()
                .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                .collect_view();

            let rows = table
                .rows
                .into_iter()
                .map(|cells| {
                    view! {
                        <TableRow>
                            {cells
                                .into_iter()
                                .map(|value| view! { <TableCellText value=value /> })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view();

            view! {
                <div class="d404-table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>{header}</TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="d404-group" data-group=group.key>
            <h2 class="d404-group__title">{group.heading}</h2>
            {body}
        </section>
    }
}
