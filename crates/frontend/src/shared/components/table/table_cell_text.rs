//! Table cell for inferred (schema-less) columns
//!
//! ```rust,ignore
//! <TableCellText value=Some("running".to_string()) />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Table cell showing a value already converted to text
///
/// `None` means the record has no such column; the cell stays empty and
/// carries the `table-cell--missing` class.
#[component]
pub fn TableCellText(value: Option<String>) -> impl IntoView {
    let class = if value.is_some() {
        "table-cell--text"
    } else {
        "table-cell--missing"
    };

    view! {
        <TableCell class=class>
            {value.unwrap_or_default()}
        </TableCell>
    }
}
