use profilecard_app_core::{ProfileCardApp, Route};
use profilecard_core::{StoreError, UserProfile};

fn alice_and_bob() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: 1,
            name: "Alice".to_string(),
            drawable_id: "https://picsum.photos/id/64/200".to_string(),
            status: true,
        },
        UserProfile {
            id: 2,
            name: "Bob".to_string(),
            drawable_id: "https://picsum.photos/id/91/200".to_string(),
            status: false,
        },
    ]
}

#[test]
fn rows_match_the_store_in_length_and_order_on_every_call() {
    let app = ProfileCardApp::new(alice_and_bob()).unwrap();

    for _ in 0..3 {
        let rows: Vec<_> = app.list().rows().collect();
        assert_eq!(rows.len(), app.store().len());
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let store_ids: Vec<_> = app.store().all().iter().map(|p| p.id).collect();
        assert_eq!(ids, store_ids);
    }
}

#[test]
fn selection_and_detail_lookup_scenario() {
    let app = ProfileCardApp::new(alice_and_bob()).unwrap();

    let rows: Vec<_> = app.list().rows().collect();
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].status_label, "Active Now");
    assert_eq!(rows[1].name, "Bob");
    assert_eq!(rows[1].status_label, "Offline");

    app.list().on_row_selected(2);
    assert_eq!(
        app.router().current_route(),
        Route::UserDetails { user_id: 2 }
    );

    let vm = app.details().load(2).unwrap();
    assert_eq!(vm.name, "Bob");
    assert!(!vm.status);

    assert_eq!(
        app.details().load(99),
        Err(StoreError::NotFound { id: 99 })
    );

    app.details().on_back();
    assert_eq!(app.router().current_route(), Route::UserList);
}

#[test]
fn every_listed_row_resolves_in_the_details_presenter() {
    let app = ProfileCardApp::with_demo_profiles().unwrap();

    let ids: Vec<_> = app.list().rows().map(|r| r.id).collect();
    assert!(!ids.is_empty());
    for id in ids {
        let vm = app.details().load(id).unwrap();
        let record = app.store().by_id(id).unwrap();
        assert_eq!(vm.name, record.name);
        assert_eq!(vm.drawable_id, record.drawable_id);
        assert_eq!(vm.status, record.status);
    }
}

#[test]
fn empty_store_yields_no_rows_and_any_lookup_misses() {
    let app = ProfileCardApp::new(Vec::new()).unwrap();
    assert_eq!(app.list().rows().count(), 0);
    assert_eq!(app.details().load(0), Err(StoreError::NotFound { id: 0 }));
}
