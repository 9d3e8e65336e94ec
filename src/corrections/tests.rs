use serde_json::{json, Value};

use super::*;
use crate::model::item::ProjectedItem;
use crate::prompt::ScriptedPrompt;
use crate::transport::mock::MockTransport;

const API: &str = "https://foo.jiraalign.com/rest/align/api/2";

fn endpoints() -> ApiEndpoints {
    ApiEndpoints::from_instance("https://foo.jiraalign.com").unwrap()
}

fn patch_of(field: &str, value: Value) -> Value {
    json!([{ "path": format!("/{field}"), "op": "replace", "value": value }])
}

fn writes(transport: &MockTransport) -> Vec<(String, Value)> {
    transport
        .recorded()
        .into_iter()
        .filter(|r| r.method != "GET")
        .map(|r| (r.url, r.body.unwrap_or(Value::Null)))
        .collect()
}

fn lookup_pages(transport: MockTransport) -> MockTransport {
    transport
        .with_get(json!([{ "id": 7, "title": "Payments" }]))
        .with_get(json!([{ "id": 193, "title": "PI 2024.1" }]))
}

#[test]
fn profiles_resolve_by_name() {
    assert_eq!(EntityProfile::for_name("features"), Some(&FEATURES));
    assert_eq!(EntityProfile::for_name("Stories"), Some(&STORIES));
    assert_eq!(EntityProfile::for_name("epics"), None);
    assert_eq!(EntityProfile::for_name("nonsense"), None);
}

#[test]
fn point_remap_table() {
    let expected = [(4, 3), (6, 5), (7, 8), (9, 8), (10, 8), (11, 13), (12, 13), (21, 20)];
    for (from, to) in expected {
        assert_eq!(STORIES.remap_points(from), Some(to));
    }
    for valid in [0, 1, 2, 3, 5, 8, 13, 20, 40] {
        assert_eq!(STORIES.remap_points(valid), None, "{valid} should be left alone");
    }
}

#[test]
fn patch_body_shape() {
    let body = patch_body(&[PatchOp::replace("effortPoints", json!(3))]);
    assert_eq!(
        body,
        json!([{ "path": "/effortPoints", "op": "replace", "value": 3 }])
    );
}

#[test]
fn tally_total_sums_outcomes() {
    let tally = Tally {
        skipped: 3,
        succeeded: 2,
        failed: 1,
    };
    assert_eq!(tally.total(), 6);
}

#[tokio::test]
async fn fix_release_moves_eligible_features() {
    let features = json!([
        { "id": 1, "programId": 7, "state": 5, "releaseId": 10, "acceptedDate": "2022-01-01", "title": "Scheduled" },
        { "id": 2, "programId": 7, "state": 3, "acceptedDate": "2022-01-01", "title": "In progress" },
        { "id": 3, "programId": 7, "state": 5, "acceptedDate": "2023-02-01", "title": "Too new" },
        { "id": 4, "programId": 7, "state": 5, "acceptedDate": "2022-05-01", "title": "Has desc", "description": "x" },
        { "id": 5, "programId": 7, "state": 5, "acceptedDate": "2021-01-01", "title": "No desc", "externalKey": "PAY-5" },
        { "id": 6, "programId": 7, "state": 5, "acceptedDate": "2021-06-01", "title": "Desc rejected" },
        { "id": 8, "programId": 7, "state": 5, "acceptedDate": "2022-09-01", "title": "PI rejected", "description": "y" },
    ]);
    let transport = lookup_pages(MockTransport::new())
        .with_get(features)
        .with_write(204, "")
        .with_write(204, "")
        .with_write(204, "")
        .with_write(400, "Description invalid")
        .with_write(500, "boom");
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let mut prompt = ScriptedPrompt::new(&["7", "5", "193"]);

    let report = release::run(&session, &FEATURES, &mut prompt).await.unwrap();

    assert_eq!(
        report.tally,
        Tally {
            skipped: 3,
            succeeded: 2,
            failed: 2,
        }
    );
    assert_eq!(report.counted_year, 1);

    let gets = transport.urls("GET");
    assert_eq!(
        gets[2],
        format!("{API}/features?expand=true&%24filter=programId%20eq%207")
    );

    assert_eq!(
        writes(&transport),
        vec![
            (format!("{API}/features/4"), patch_of("releaseId", json!(193))),
            (format!("{API}/features/5"), patch_of("description", json!("No desc"))),
            (format!("{API}/features/5"), patch_of("releaseId", json!(193))),
            (format!("{API}/features/6"), patch_of("description", json!("Desc rejected"))),
            (format!("{API}/features/8"), patch_of("releaseId", json!(193))),
        ]
    );
}

#[tokio::test]
async fn fix_release_asks_per_item_outside_batch_mode() {
    let stories = json!([
        { "id": 11, "programId": 7, "state": 5, "acceptedDate": "2022-01-01", "title": "Keep", "description": "d" },
        { "id": 12, "programId": 7, "state": 5, "acceptedDate": "2022-02-01", "title": "Move", "description": "d" },
    ]);
    let transport = lookup_pages(MockTransport::new()).with_get(stories);
    let e = endpoints();
    let session = Session::new(&transport, &e, false, 1000);
    let mut prompt = ScriptedPrompt::new(&["7", "5", "193", "n", "y"]);

    let report = release::run(&session, &STORIES, &mut prompt).await.unwrap();

    assert_eq!(report.tally.skipped, 1);
    assert_eq!(report.tally.succeeded, 1);
    assert_eq!(
        writes(&transport),
        vec![(format!("{API}/stories/12"), patch_of("releaseId", json!(193)))]
    );
    assert_eq!(prompt.asked[3], "DO YOU WANT TO MOVE THIS STORY? ");
}

#[tokio::test]
async fn fix_release_skips_items_missing_match_fields() {
    let items: Vec<ProjectedItem> = [
        json!({ "id": 1, "itemtype": "features", "state": 5 }),
        json!({ "id": 2, "itemtype": "features", "programId": 7 }),
        json!({ "id": 3, "itemtype": "features", "programId": 7, "state": 5 }),
    ]
    .into_iter()
    .map(|v| serde_json::from_value(v).unwrap())
    .collect();
    let transport = MockTransport::new();
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let fix = release::ReleaseFix {
        program_id: 7,
        state_id: 5,
        new_release_id: 193,
    };
    let mut prompt = ScriptedPrompt::new(&[]);

    let report = release::apply(&session, &FEATURES, &fix, &items, &mut prompt)
        .await
        .unwrap();

    // The third has no accepted date, so it is not in an eligible year.
    assert_eq!(report.tally.skipped, 3);
    assert!(writes(&transport).is_empty());
}

#[tokio::test]
async fn fix_release_stops_on_read_failure() {
    let transport = MockTransport::new().with_get(json!({ "message": "unauthorized" }));
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let mut prompt = ScriptedPrompt::new(&["7", "5", "193"]);

    assert!(release::run(&session, &FEATURES, &mut prompt).await.is_err());
    assert!(writes(&transport).is_empty());
}

#[tokio::test]
async fn fix_project_posts_copy_with_new_key() {
    let transport = MockTransport::new()
        .with_get(json!({
            "id": 42,
            "title": "Checkout flow",
            "createDate": "2020-01-01",
            "self": "https://foo.jiraalign.com/rest/align/api/2/stories/42",
            "jiraProjectKey": "OLD",
            "programId": 7,
            "unknownField": true,
        }))
        .with_write(201, "1234");
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let mut prompt = ScriptedPrompt::new(&["42", "7", "NEWKEY"]);

    let report = project_key::run(&session, &STORIES, &mut prompt).await.unwrap();

    assert_eq!(report.new_id.as_deref(), Some("1234"));
    assert_eq!(report.tally.succeeded, 1);
    assert_eq!(transport.urls("GET"), vec![format!("{API}/stories/42")]);
    assert_eq!(
        writes(&transport),
        vec![(
            format!("{API}/stories"),
            json!({
                "itemtype": "stories",
                "title": "Checkout flow",
                "jiraProjectKey": "NEWKEY",
                "programId": 7,
            })
        )]
    );
}

#[tokio::test]
async fn fix_project_counts_rejected_copy() {
    let transport = MockTransport::new()
        .with_get(json!({ "id": 9, "title": "F" }))
        .with_write(400, "jiraProjectKey is invalid");
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let mut prompt = ScriptedPrompt::new(&["9", "7", "NOPE"]);

    let report = project_key::run(&session, &FEATURES, &mut prompt).await.unwrap();

    assert_eq!(report.new_id, None);
    assert_eq!(report.tally.failed, 1);
    assert_eq!(writes(&transport)[0].0, format!("{API}/features"));
}

#[test]
fn copy_with_project_key_drops_server_fields() {
    let source: ProjectedItem = serde_json::from_value(json!({
        "id": 1,
        "itemtype": "features",
        "createDate": "2020",
        "self": "x",
        "title": "T",
    }))
    .unwrap();
    let body = project_key::copy_with_project_key(source, "ABC");
    assert_eq!(
        body,
        json!({ "itemtype": "features", "title": "T", "jiraProjectKey": "ABC" })
    );
}

#[tokio::test]
async fn fix_points_remaps_off_scale_estimates() {
    let stories = json!([
        { "id": 1, "programId": 5, "effortPoints": 4, "title": "a" },
        { "id": 2, "programId": 5, "effortPoints": 5, "title": "b" },
        { "id": 3, "programId": 5, "effortPoints": 21, "title": "c" },
        { "id": 4, "programId": 5, "title": "d" },
        { "id": 5, "programId": 5, "effortPoints": 6.0, "title": "e" },
        { "id": 6, "programId": 5, "effortPoints": 12, "title": "f" },
    ]);
    let transport = MockTransport::new()
        .with_get(json!([{ "id": 5, "title": "Mobile" }]))
        .with_get(stories)
        .with_write(204, "")
        .with_write(204, "")
        .with_write(204, "")
        .with_write(500, "boom");
    let e = endpoints();
    let session = Session::new(&transport, &e, true, 1000);
    let mut prompt = ScriptedPrompt::new(&["5"]);

    let tally = points::run(&session, &STORIES, &mut prompt).await.unwrap();

    assert_eq!(
        tally,
        Tally {
            skipped: 2,
            succeeded: 3,
            failed: 1,
        }
    );
    assert_eq!(
        writes(&transport),
        vec![
            (format!("{API}/stories/1"), patch_of("effortPoints", json!(3))),
            (format!("{API}/stories/3"), patch_of("effortPoints", json!(20))),
            (format!("{API}/stories/5"), patch_of("effortPoints", json!(5))),
            (format!("{API}/stories/6"), patch_of("effortPoints", json!(13))),
        ]
    );
}
