//! End-to-end scenarios over the public store API: tenant listings,
//! descendant queries, and move sequences with their invariants.

use folderhub_core::error::ErrorKind;
use folderhub_core::types::TenantId;
use folderhub_entity::Folder;
use folderhub_store::FolderStore;

fn org1() -> TenantId {
    "c1556e17-b7c0-45a3-a6ae-9546248fb17a".parse().expect("uuid")
}

fn org2() -> TenantId {
    "f8a982ed-f17a-4dd9-99ca-ef05b6f5b17f".parse().expect("uuid")
}

fn sample_store() -> FolderStore {
    FolderStore::from_records(vec![
        Folder::root("alpha", org1()),
        Folder::at_path("bravo", org1(), "alpha.bravo"),
        Folder::at_path("charlie", org1(), "alpha.bravo.charlie"),
        Folder::at_path("delta", org1(), "alpha.delta"),
        Folder::root("echo", org1()),
        Folder::root("foxtrot", org2()),
    ])
    .expect("sample records are valid")
}

fn sorted_names(folders: &[Folder]) -> Vec<String> {
    let mut names: Vec<String> = folders.iter().map(|f| f.name.clone()).collect();
    names.sort();
    names
}

fn path_of<'a>(folders: &'a [Folder], name: &str) -> &'a str {
    folders
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.path.as_str())
        .unwrap_or_else(|| panic!("folder '{name}' missing from listing"))
}

#[test]
fn list_by_tenant_returns_each_organizations_folders() {
    let store = sample_store();

    assert_eq!(
        sorted_names(&store.list_by_tenant(org1())),
        vec!["alpha", "bravo", "charlie", "delta", "echo"]
    );
    assert_eq!(sorted_names(&store.list_by_tenant(org2())), vec!["foxtrot"]);
    assert!(store.list_by_tenant(TenantId::new()).is_empty());
}

#[test]
fn descendants_cover_the_whole_subtree() {
    let store = sample_store();

    let descendants = store.list_descendants(org1(), "alpha").expect("alpha");
    assert_eq!(sorted_names(&descendants), vec!["bravo", "charlie", "delta"]);

    let descendants = store.list_descendants(org1(), "bravo").expect("bravo");
    assert_eq!(sorted_names(&descendants), vec!["charlie"]);
}

#[test]
fn descendants_of_leaf_and_bare_root_are_empty() {
    let store = sample_store();

    assert!(store.list_descendants(org1(), "charlie").expect("leaf").is_empty());
    assert!(store.list_descendants(org1(), "echo").expect("root").is_empty());
    assert!(store.list_descendants(org2(), "foxtrot").expect("root").is_empty());
}

#[test]
fn descendant_errors_distinguish_missing_from_foreign() {
    let store = sample_store();

    let err = store
        .list_descendants(org1(), "foxtrot")
        .expect_err("foxtrot belongs to org2");
    assert_eq!(err.kind(), ErrorKind::NotInOrganization);

    let err = store
        .list_descendants(org1(), "nope")
        .expect_err("nope exists nowhere");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = store
        .list_descendants(org2(), "alpha")
        .expect_err("alpha belongs to org1");
    assert_eq!(err.kind(), ErrorKind::NotInOrganization);
}

#[test]
fn move_relocates_the_subtree() {
    let store = sample_store();

    let updated = store.move_folder(org1(), "bravo", "delta").expect("move");
    assert_eq!(path_of(&updated, "bravo"), "alpha.delta.bravo");
    assert_eq!(path_of(&updated, "charlie"), "alpha.delta.bravo.charlie");
}

#[test]
fn move_errors_match_their_scenarios() {
    let store = sample_store();

    let err = store
        .move_folder(org1(), "bravo", "bravo")
        .expect_err("self move");
    assert_eq!(err.kind(), ErrorKind::CannotMoveToItself);

    let err = store
        .move_folder(org1(), "bravo", "charlie")
        .expect_err("descendant move");
    assert_eq!(err.kind(), ErrorKind::CannotMoveToOwnDescendant);

    let err = store
        .move_folder(org1(), "bravo", "foxtrot")
        .expect_err("cross-organization move");
    assert_eq!(err.kind(), ErrorKind::CannotMoveAcrossOrganizations);
}

// Path consistency: after any sequence of moves, every folder's path is
// its parent's path plus its own name, roots keep path == name, and the
// descendant sets reachable through the store stay acyclic and complete.
#[test]
fn paths_stay_consistent_across_move_sequences() {
    let store = sample_store();

    store.move_folder(org1(), "bravo", "delta").expect("first move");
    store.move_folder(org1(), "delta", "echo").expect("second move");
    store.move_folder(org1(), "bravo", "alpha").expect("third move");

    let folders = store.list_by_tenant(org1());
    for folder in &folders {
        match folder.path.parent() {
            Some(parent_path) => {
                assert_eq!(folder.path.as_str(), parent_path.join(&folder.name).as_str());
                // The parent path is owned by exactly one folder in the
                // same organization.
                let owners: Vec<_> = folders
                    .iter()
                    .filter(|f| f.path == parent_path)
                    .collect();
                assert_eq!(owners.len(), 1, "parent of '{}' must exist", folder.path);
            }
            None => assert_eq!(folder.path.as_str(), folder.name),
        }
    }

    assert_eq!(path_of(&folders, "delta"), "echo.delta");
    assert_eq!(path_of(&folders, "bravo"), "alpha.bravo");
    assert_eq!(path_of(&folders, "charlie"), "alpha.bravo.charlie");
}

#[test]
fn moving_to_the_current_parent_is_idempotent() {
    let store = sample_store();

    let before = store.list_by_tenant(org1());
    let after = store.move_folder(org1(), "bravo", "alpha").expect("move");
    for folder in &before {
        assert_eq!(path_of(&after, &folder.name), folder.path.as_str());
    }
}

#[test]
fn descendants_follow_a_moved_folder() {
    let store = sample_store();

    store.move_folder(org1(), "bravo", "echo").expect("move");

    let echo_descendants = store.list_descendants(org1(), "echo").expect("echo");
    assert_eq!(sorted_names(&echo_descendants), vec!["bravo", "charlie"]);

    let alpha_descendants = store.list_descendants(org1(), "alpha").expect("alpha");
    assert_eq!(sorted_names(&alpha_descendants), vec!["delta"]);
}

#[test]
fn moves_never_leak_across_organizations() {
    let store = sample_store();

    store.move_folder(org1(), "bravo", "echo").expect("move");

    let org2_folders = store.list_by_tenant(org2());
    assert_eq!(sorted_names(&org2_folders), vec!["foxtrot"]);
    assert_eq!(path_of(&org2_folders, "foxtrot"), "foxtrot");
}
