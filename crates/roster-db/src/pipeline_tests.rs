//! End-to-end tests for the audit/history pipeline.
//!
//! Each test drives the service through its public mutation API and asserts
//! on the resulting rows, history records, and tenant-facing views.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use roster_core::auditable::Auditable;
use roster_core::enums::ChangeType;
use roster_core::views::EmployeeUpdate;

use crate::error::DatabaseError;
use crate::test_support::{new_department, new_employee, test_service};

#[tokio::test]
async fn create_stamps_equal_timestamps_at_server_instant() {
    let svc = test_service().await;

    let before = Utc::now().naive_utc();
    svc.add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();
    let after = Utc::now().naive_utc();

    // Raw entity keeps canonical server-zone (UTC) values.
    let emp = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(emp.created_at, emp.modified_at);
    assert!(emp.created_at >= before - Duration::seconds(1));
    assert!(emp.created_at <= after + Duration::seconds(1));
    assert_eq!(emp.version, 0);
}

#[tokio::test]
async fn update_advances_modified_at_and_freezes_created_at() {
    let svc = test_service().await;
    svc.add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();
    let created = svc.find_by_email("ada@example.com").await.unwrap().unwrap();

    let update = EmployeeUpdate {
        position: Some("Staff Engineer".into()),
        ..Default::default()
    };
    let view = svc
        .update_employee(&created.id, update, "ZZ")
        .await
        .unwrap();

    let updated = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.modified_at >= created.modified_at);
    assert_eq!(updated.position.as_deref(), Some("Staff Engineer"));
    assert_eq!(updated.version, 1);
    // Unknown tenant code: view timestamps equal server-zone values.
    assert_eq!(view.modified_at, updated.modified_at);
}

#[tokio::test]
async fn partial_update_keeps_unset_fields() {
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();

    let update = EmployeeUpdate {
        salary: Some(150_000.0),
        ..Default::default()
    };
    let updated = svc.update_employee(&view.id, update, "NG").await.unwrap();

    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.position.as_deref(), Some("Engineer"));
    assert_eq!(updated.department.as_deref(), Some("Platform"));
    assert_eq!(updated.salary, Some(150_000.0));
}

#[tokio::test]
async fn each_mutation_appends_exactly_one_history_record() {
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();

    let history = svc.list_history(&view.id, 10).await.unwrap();
    assert_eq!(history.len(), 1);
    let emp = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(history[0].changes, emp.render_snapshot());
    assert_eq!(history[0].employee_id, view.id);

    let update = EmployeeUpdate {
        position: Some("Staff Engineer".into()),
        ..Default::default()
    };
    svc.update_employee(&view.id, update, "NG").await.unwrap();

    let history = svc.list_history(&view.id, 10).await.unwrap();
    assert_eq!(history.len(), 2);
    let emp = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    // Newest first: the latest record reflects the post-update snapshot.
    assert_eq!(history[0].changes, emp.render_snapshot());
    assert!(history[0].changes.contains("Staff Engineer"));
    assert!(history[1].changes.contains("position=Engineer"));
}

#[tokio::test]
async fn same_timestamp_history_keeps_insertion_order() {
    // Two mutations can land in the same microsecond; newest-first must
    // then mean insertion order, not whatever the random ids sort to.
    let svc = test_service().await;
    for id in ["hst-ffffffff", "hst-00000000"] {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO employee_history (id, employee_id, change_type, changes, timestamp)
                 VALUES (?1, 'emp-00000001', 'UPDATED', 'snap', '2024-01-01 00:00:00.000000')",
                [id],
            )
            .await
            .unwrap();
    }

    let history = svc.list_history("emp-00000001", 10).await.unwrap();
    assert_eq!(history[0].id, "hst-00000000");
    assert_eq!(history[1].id, "hst-ffffffff");
}

#[tokio::test]
async fn create_is_tagged_updated_like_the_original_service() {
    // The source tagged post-create and post-update alike as UPDATED when
    // publishing. This pins that behavior; change deliberately, not by
    // accident.
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();

    let history = svc.list_history(&view.id, 10).await.unwrap();
    assert_eq!(history[0].change_type, ChangeType::Updated);
}

#[tokio::test]
async fn ng_tenant_sees_created_at_shifted_one_hour() {
    // Server zone UTC; NG maps to Africa/Lagos (UTC+1, no DST). The
    // tenant-facing view shows the same instant one hour ahead of the
    // stored server-zone value, and a history record exists for the new id.
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();

    let emp = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(view.created_at, emp.created_at + Duration::hours(1));
    assert_eq!(view.modified_at, emp.modified_at + Duration::hours(1));

    let history = svc.list_history(&view.id, 10).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[rstest::rstest]
#[case("NG", Duration::hours(1))]
#[case("AE", Duration::hours(4))]
#[case("IN", Duration::minutes(330))]
#[tokio::test]
async fn get_employee_localizes_per_request_tenant(
    #[case] code: &str,
    #[case] offset: Duration,
) {
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "ZZ")
        .await
        .unwrap();

    // "ZZ" is unmapped, so `view` carries raw server-zone timestamps.
    let localized = svc.get_employee(&view.id, code).await.unwrap().unwrap();
    assert_eq!(localized.created_at, view.created_at + offset);
    assert_eq!(localized.modified_at, view.modified_at + offset);
}

#[tokio::test]
async fn history_append_failure_fails_the_mutation_but_not_the_row() {
    // Simulated storage outage: the history table is gone, so the recorder's
    // independent append fails. The create reports failure to its caller
    // even though the employee row is already durable.
    let svc = test_service().await;
    svc.db()
        .conn()
        .execute("DROP TABLE employee_history", ())
        .await
        .unwrap();

    let result = svc.add_employee(new_employee("ada@example.com"), "NG").await;
    assert!(result.is_err(), "mutation must surface the history failure");

    let emp = svc.find_by_email("ada@example.com").await.unwrap();
    assert!(emp.is_some(), "entity row persisted despite the failure");
}

#[tokio::test]
async fn unsupported_entity_kind_is_skipped_without_error() {
    let svc = test_service().await;
    let department = svc.add_department(new_department("Platform")).await.unwrap();

    // Lifecycle still stamped it.
    assert_eq!(department.created_at, department.modified_at);

    // No history record was appended for any entity.
    let mut rows = svc
        .db()
        .conn()
        .query("SELECT COUNT(*) FROM employee_history", ())
        .await
        .unwrap();
    let row = rows.next().await.unwrap().unwrap();
    assert_eq!(row.get::<i64>(0).unwrap(), 0);

    let fetched = svc.get_department(&department.id).await.unwrap().unwrap();
    assert_eq!(fetched, department);
}

#[tokio::test]
async fn duplicate_email_is_rejected_before_any_write() {
    let svc = test_service().await;
    svc.add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();

    let err = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::EmailAlreadyExists { .. }));

    // Only the first create left a history record.
    let emp = svc.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(svc.list_history(&emp.id, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_missing_employee_is_not_found() {
    let svc = test_service().await;
    let err = svc
        .update_employee("emp-00000000", EmployeeUpdate::default(), "NG")
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound { .. }));
}

#[tokio::test]
async fn stale_version_update_affects_no_rows() {
    // Pins the optimistic-lock SQL contract: a write carrying a stale
    // version number matches nothing.
    let svc = test_service().await;
    let view = svc
        .add_employee(new_employee("ada@example.com"), "NG")
        .await
        .unwrap();
    svc.update_employee(
        &view.id,
        EmployeeUpdate {
            position: Some("Staff Engineer".into()),
            ..Default::default()
        },
        "NG",
    )
    .await
    .unwrap();

    // Replays a write based on the pre-update read (version 0).
    let affected = svc
        .db()
        .conn()
        .execute(
            "UPDATE employees SET position = 'Imposter', version = 1
             WHERE id = ?1 AND version = 0",
            [view.id.as_str()],
        )
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn list_employees_paginates_in_creation_order() {
    let svc = test_service().await;
    for i in 0..5 {
        svc.add_employee(new_employee(&format!("emp{i}@example.com")), "NG")
            .await
            .unwrap();
    }

    let page0 = svc.list_employees(0, 2, "NG").await.unwrap();
    let page1 = svc.list_employees(1, 2, "NG").await.unwrap();
    let page2 = svc.list_employees(2, 2, "NG").await.unwrap();

    assert_eq!(page0.len(), 2);
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);

    let mut emails: Vec<String> = page0
        .iter()
        .chain(&page1)
        .chain(&page2)
        .map(|v| v.email.clone())
        .collect();
    emails.dedup();
    assert_eq!(emails.len(), 5, "pages must not overlap");
}

#[tokio::test]
async fn get_employee_missing_is_none() {
    let svc = test_service().await;
    assert!(svc.get_employee("emp-00000000", "NG").await.unwrap().is_none());
}
