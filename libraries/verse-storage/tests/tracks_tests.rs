//! Integration tests for the tracks vertical slice

mod test_helpers;

use test_helpers::*;

#[tokio::test]
async fn test_upsert_then_get() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut track = test_track("m-1", "Opening");
    track.artist = Some("The Commit Log".to_string());

    verse_storage::tracks::upsert(pool, &track).await.unwrap();

    let loaded = verse_storage::tracks::get_by_id(pool, "m-1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.id, "m-1");
    assert_eq!(loaded.title, "Opening");
    assert_eq!(loaded.artist.as_deref(), Some("The Commit Log"));
}

#[tokio::test]
async fn test_upsert_overwrites_metadata_on_id_collision() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    verse_storage::tracks::upsert(pool, &test_track("m-1", "Old Title"))
        .await
        .unwrap();

    let mut updated = test_track("m-1", "New Title");
    updated.album = Some("Reissue".to_string());
    verse_storage::tracks::upsert(pool, &updated).await.unwrap();

    let all = verse_storage::tracks::get_all(pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "New Title");
    assert_eq!(all[0].album.as_deref(), Some("Reissue"));
}

#[tokio::test]
async fn test_delete_cascades_membership_rows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Mixtape").await;
    let track = test_track("m-1", "Gone Soon");
    seed_playlist(pool, &playlist, std::slice::from_ref(&track)).await;

    verse_storage::tracks::delete(pool, "m-1").await.unwrap();

    assert!(!track_exists(pool, "m-1").await);
    assert!(sequence(pool, &playlist.id).await.is_empty());
}

#[tokio::test]
async fn test_get_all_sorts_by_title() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    verse_storage::tracks::upsert(pool, &test_track("m-2", "Bravo"))
        .await
        .unwrap();
    verse_storage::tracks::upsert(pool, &test_track("m-1", "Alpha"))
        .await
        .unwrap();

    let all = verse_storage::tracks::get_all(pool).await.unwrap();
    let titles: Vec<_> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo"]);
}
