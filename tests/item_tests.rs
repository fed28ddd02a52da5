//! Add, edit, toggle and delete through the tool surface
mod common;

use common::*;

#[tokio::test]
async fn test_add_items_in_order() {
    let (handler, _temp_file) = get_test_handler();

    let response = handler.handle_add(TODO_ITEMS[0].to_string()).await.unwrap();
    assert_eq!(extract_id_from_response(&response), "#1");
    assert_eq!(
        listed_titles(&handler.handle_view().await.unwrap()),
        vec![TODO_ITEMS[0]]
    );

    handler.handle_add(TODO_ITEMS[1].to_string()).await.unwrap();
    assert_eq!(
        listed_titles(&handler.handle_view().await.unwrap()),
        vec![TODO_ITEMS[0], TODO_ITEMS[1]]
    );
}

#[tokio::test]
async fn test_append_new_items_to_bottom() {
    let (handler, _temp_file) = get_test_handler();
    create_default_todos(&handler).await;

    let view = handler.handle_view().await.unwrap();
    assert!(view.contains("3 items left"));
    assert_eq!(listed_titles(&view), TODO_ITEMS.to_vec());
}

#[tokio::test]
async fn test_blank_title_not_added() {
    let (handler, _temp_file) = get_test_handler();

    let response = handler.handle_add("   ".to_string()).await.unwrap();
    assert_eq!(response, "Nothing added: title is blank");
    assert_eq!(handler.handle_view().await.unwrap(), "No items");
}

#[tokio::test]
async fn test_mark_and_unmark_complete() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;

    let response = handler.handle_toggle(ids[0].clone()).await.unwrap();
    assert_eq!(response, "Item #1 marked completed (2 items left)");
    let view = handler.handle_view().await.unwrap();
    assert!(view.contains("- [x] #1 buy some cheese"));
    assert!(view.contains("- [ ] #2 feed the cat"));

    let response = handler.handle_toggle(ids[0].clone()).await.unwrap();
    assert_eq!(response, "Item #1 marked active (3 items left)");
    assert!(handler.handle_view().await.unwrap().contains("- [ ] #1 buy some cheese"));
}

#[tokio::test]
async fn test_edit_item() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;

    handler
        .handle_edit(ids[1].clone(), "buy some sausages".to_string())
        .await
        .unwrap();
    assert_eq!(
        listed_titles(&handler.handle_view().await.unwrap()),
        vec!["buy some cheese", "buy some sausages", "book a doctors appointment"]
    );
}

#[tokio::test]
async fn test_edit_trims_entered_text() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;

    let response = handler
        .handle_edit(ids[1].clone(), "    buy some sausages    ".to_string())
        .await
        .unwrap();
    assert_eq!(response, "Item #2 updated: buy some sausages");
}

#[tokio::test]
async fn test_edit_to_empty_removes_item() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;

    let response = handler.handle_edit(ids[1].clone(), "".to_string()).await.unwrap();
    assert_eq!(response, "Item #2 deleted (blank title): feed the cat");
    assert_eq!(
        listed_titles(&handler.handle_view().await.unwrap()),
        vec![TODO_ITEMS[0], TODO_ITEMS[2]]
    );
}

#[tokio::test]
async fn test_unknown_id_is_error() {
    let (handler, _temp_file) = get_test_handler();
    create_default_todos(&handler).await;

    assert!(handler.handle_toggle("#42".to_string()).await.is_err());
    assert!(handler.handle_edit("#42".to_string(), "x".to_string()).await.is_err());
    assert!(handler.handle_delete("#42".to_string()).await.is_err());
    assert!(handler.handle_toggle("cheese".to_string()).await.is_err());
}

#[tokio::test]
async fn test_delete_item() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;

    let response = handler.handle_delete(ids[0].clone()).await.unwrap();
    assert_eq!(response, "Item #1 deleted: buy some cheese");
    assert!(handler.handle_delete(ids[0].clone()).await.is_err());
}

#[tokio::test]
async fn test_toggle_all() {
    let (handler, _temp_file) = get_test_handler();
    let ids = create_default_todos(&handler).await;
    handler.handle_toggle(ids[0].clone()).await.unwrap();

    assert!(handler.handle_view().await.unwrap().contains("[ ] Mark all as complete"));

    let response = handler.handle_toggle_all(true).await.unwrap();
    assert_eq!(response, "Marked 2 item(s) completed (0 items left)");
    assert!(handler.handle_view().await.unwrap().contains("[x] Mark all as complete"));

    let response = handler.handle_toggle_all(false).await.unwrap();
    assert_eq!(response, "Marked 3 item(s) active (3 items left)");
    assert!(handler.handle_view().await.unwrap().contains("[ ] Mark all as complete"));
}

#[tokio::test]
async fn test_counter() {
    let (handler, _temp_file) = get_test_handler();

    handler.handle_add(TODO_ITEMS[0].to_string()).await.unwrap();
    assert!(handler.handle_view().await.unwrap().contains("1 item left"));

    handler.handle_add(TODO_ITEMS[1].to_string()).await.unwrap();
    assert!(handler.handle_view().await.unwrap().contains("2 items left"));
}
