//! Pure projection of [`DashboardState`] into what the page shows

use super::state::DashboardState;
use crate::shared::components::table::{derive_columns, row_cells};
use contracts::dashboards::d404_resource_inventory::ServiceGroup;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Error(String),
    Ready(ReadyView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub refresh_disabled: bool,
    pub groups: Vec<GroupView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    /// Raw group name, used as element key
    pub key: String,
    pub heading: String,
    pub body: GroupBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupBody {
    NoData,
    Table(TableView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    /// One entry per record, aligned to `columns`; `None` for a missing key
    pub rows: Vec<Vec<Option<String>>>,
}

/// Loading wins over error, error wins over data
pub fn render_dashboard(state: &DashboardState) -> DashboardView {
    if state.loading {
        return DashboardView::Loading;
    }
    if let Some(message) = &state.error {
        return DashboardView::Error(message.clone());
    }

    DashboardView::Ready(ReadyView {
        refresh_disabled: state.fetching,
        groups: state.dataset.groups().iter().map(render_group).collect(),
    })
}

pub fn render_group(group: &ServiceGroup) -> GroupView {
    let body = if group.records.is_empty() {
        GroupBody::NoData
    } else {
        let columns = derive_columns(&group.records);
        let rows = group
            .records
            .iter()
            .map(|record| row_cells(record, &columns))
            .collect();
        GroupBody::Table(TableView { columns, rows })
    };

    GroupView {
        key: group.name.clone(),
        heading: format_heading(&group.name),
        body,
    }
}

/// `ec2_instances` -> `Ec2 instances`
///
/// Only the first underscore becomes a space: `rds_db_instances` ->
/// `Rds db_instances`.
pub fn format_heading(name: &str) -> String {
    let spaced = name.replacen('_', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::{LOAD_ERROR_MESSAGE, TRIGGER_ERROR_MESSAGE};
    use super::*;
    use contracts::dashboards::d404_resource_inventory::ServicesDataset;

    fn ready_state(body: &str) -> DashboardState {
        let dataset: ServicesDataset = serde_json::from_str(body).unwrap();
        let mut state = DashboardState::new();
        state.finish_load(dataset);
        state
    }

    fn ready(view: DashboardView) -> ReadyView {
        match view {
            DashboardView::Ready(ready) => ready,
            other => panic!("expected ready view, got {:?}", other),
        }
    }

    #[test]
    fn test_format_heading() {
        assert_eq!(format_heading("ec2_instances"), "Ec2 instances");
        assert_eq!(format_heading("s3_buckets"), "S3 buckets");
        assert_eq!(format_heading("iam_users"), "Iam users");
        assert_eq!(format_heading("services"), "Services");
        assert_eq!(format_heading(""), "");
    }

    #[test]
    fn test_format_heading_replaces_first_underscore_only() {
        assert_eq!(format_heading("rds_db_instances"), "Rds db_instances");
        assert_eq!(format_heading("_private_group"), " private_group");
    }

    #[test]
    fn test_two_groups_table_and_placeholder() {
        let state = ready_state(
            r#"{"ec2_instances": [{"id": "i-1", "state": "running"}], "s3_buckets": []}"#,
        );
        let view = ready(render_dashboard(&state));

        assert!(!view.refresh_disabled);
        assert_eq!(view.groups.len(), 2);

        let ec2 = &view.groups[0];
        assert_eq!(ec2.key, "ec2_instances");
        assert_eq!(ec2.heading, "Ec2 instances");
        assert_eq!(
            ec2.body,
            GroupBody::Table(TableView {
                columns: vec!["id".to_string(), "state".to_string()],
                rows: vec![vec![Some("i-1".to_string()), Some("running".to_string())]],
            })
        );

        let s3 = &view.groups[1];
        assert_eq!(s3.heading, "S3 buckets");
        assert_eq!(s3.body, GroupBody::NoData);
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = ready_state(
            r#"{"rds_instances": [{"engine": "postgres", "port": 5432, "multi_az": false}],
                "iam_users": [{"user_name": "ops", "password_last_used": null}]}"#,
        );
        assert_eq!(render_dashboard(&state), render_dashboard(&state));
    }

    #[test]
    fn test_loading_takes_precedence() {
        let mut state = ready_state(r#"{"ec2_instances": []}"#);
        state.fail_trigger();
        state.begin_load();
        assert_eq!(render_dashboard(&state), DashboardView::Loading);
        assert_eq!(render_dashboard(&DashboardState::new()), DashboardView::Loading);
    }

    #[test]
    fn test_error_hides_tables() {
        let mut state = ready_state(r#"{"ec2_instances": [{"id": "i-1"}]}"#);
        state.fail_trigger();
        assert_eq!(
            render_dashboard(&state),
            DashboardView::Error(TRIGGER_ERROR_MESSAGE.to_string())
        );

        state.begin_load();
        state.fail_load();
        assert_eq!(
            render_dashboard(&state),
            DashboardView::Error(LOAD_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_refresh_disabled_while_fetching() {
        let mut state = ready_state(r#"{"s3_buckets": []}"#);
        assert!(state.try_begin_trigger());
        assert!(ready(render_dashboard(&state)).refresh_disabled);
    }

    #[test]
    fn test_non_uniform_records() {
        let state = ready_state(
            r#"{"ec2_instances": [
                {"id": "i-1", "state": "running"},
                {"id": "i-2", "public_ip": "1.2.3.4"},
                {"state": "stopped", "id": "i-3"}
            ]}"#,
        );
        let view = ready(render_dashboard(&state));
        let GroupBody::Table(table) = &view.groups[0].body else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, vec!["id", "state"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Some("i-1".to_string()), Some("running".to_string())],
                vec![Some("i-2".to_string()), None],
                vec![Some("i-3".to_string()), Some("stopped".to_string())],
            ]
        );
    }
}
