use super::*;

fn found(names: &[&str]) -> SearchResults {
    let users: Vec<RankedUser> = names
        .iter()
        .enumerate()
        .map(|(i, name)| RankedUser { global_rank: i as u64 + 1, id: i as u64 + 1, username: (*name).into(), rating: 2000 })
        .collect();
    SearchResults { count: users.len() as u64, users }
}

#[tokio::test(start_paused = true)]
async fn debounce_releases_only_the_latest_value() {
    let (tx, rx) = mpsc::channel(8);
    let mut debounced = Debounced::new(rx, DEBOUNCE_DELAY);

    tx.send("r").await.unwrap();
    tx.send("ra").await.unwrap();
    tx.send("rahul").await.unwrap();

    let start = tokio::time::Instant::now();
    assert_eq!(debounced.next().await, Some("rahul"));
    assert!(start.elapsed() >= DEBOUNCE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn debounce_restarts_the_timer_on_new_input() {
    let (tx, rx) = mpsc::channel(8);
    let mut debounced = Debounced::new(rx, DEBOUNCE_DELAY);

    tokio::spawn(async move {
        tx.send(1).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(2).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(3).await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let start = tokio::time::Instant::now();
    assert_eq!(debounced.next().await, Some(3));
    assert!(start.elapsed() >= Duration::from_millis(700));
}

#[tokio::test(start_paused = true)]
async fn debounce_flushes_pending_value_on_close() {
    let (tx, rx) = mpsc::channel(8);
    let mut debounced = Debounced::new(rx, DEBOUNCE_DELAY);
    tx.send("neha").await.unwrap();
    drop(tx);
    assert_eq!(debounced.next().await, Some("neha"));
    assert_eq!(debounced.next().await, None);
}

#[test]
fn blank_query_clears_without_searching() {
    let mut view = SearchView::default();
    assert_eq!(view.submit("rahul"), Some("rahul".to_owned()));
    view.apply(Ok(found(&["rahul", "rahul_kumar"])));
    assert_eq!(view.results().len(), 2);

    assert_eq!(view.submit("   "), None);
    assert!(view.results().is_empty());
    assert!(!view.has_searched());
    assert_eq!(view.summary(), "Start typing to search for players");
}

#[test]
fn submit_trims_query() {
    let mut view = SearchView::default();
    assert_eq!(view.submit("  priya "), Some("priya".to_owned()));
    assert!(view.has_searched());
    assert_eq!(view.query(), "  priya ");
}

#[test]
fn summary_pluralises() {
    let mut view = SearchView::default();
    view.submit("amit");
    view.apply(Ok(found(&["amit"])));
    assert_eq!(view.summary(), "Found 1 player");

    view.submit("a");
    view.apply(Ok(found(&["amit", "anjali", "arjun"])));
    assert_eq!(view.summary(), "Found 3 players");

    view.submit("zzz");
    view.apply(Ok(found(&[])));
    assert_eq!(view.summary(), "No players found matching \"zzz\"");
}

#[test]
fn error_replaces_results() {
    let mut view = SearchView::default();
    view.submit("rohan");
    view.apply(Ok(found(&["rohan"])));
    view.submit("rohan_");
    view.apply(Err("Failed to search users: 500 Internal Server Error".into()));
    assert!(view.results().is_empty());
    assert_eq!(view.error(), Some("Failed to search users: 500 Internal Server Error"));
    assert!(view.summary().starts_with("! "));

    view.submit("rohan");
    assert!(view.error().is_none());
}
