//! End-to-end tests: form and list view sharing one store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_todo::{
    ChangeEvent, CreateTodo, FormConfig, ListItem, SubmitEvent, Todo, TodoAction, Todos,
    new_store,
};
use composable_todo_testing::init_test_tracing;
use proptest::prelude::*;

fn texts(items: &[ListItem]) -> Vec<&str> {
    items.iter().map(|item| item.text.as_str()).collect()
}

#[tokio::test]
async fn test_type_submit_render_scenario() {
    init_test_tracing();

    let store = new_store();
    let mut form = CreateTodo::new(store.clone(), FormConfig::default());
    let list = Todos::new(store.clone());

    assert!(store.state(|s| s.todos.is_empty()).await);

    form.on_change(ChangeEvent::new("a"));
    form.on_submit(&mut SubmitEvent::new()).await.unwrap();

    assert_eq!(store.state(|s| s.todos.clone()).await, vec![Todo::new("a")]);
    assert_eq!(texts(&list.render().await), vec!["a"]);

    form.on_change(ChangeEvent::new("b"));
    form.on_submit(&mut SubmitEvent::new()).await.unwrap();

    assert_eq!(
        store.state(|s| s.todos.clone()).await,
        vec![Todo::new("a"), Todo::new("b")]
    );
    assert_eq!(
        list.render().await,
        vec![
            ListItem {
                key: 0,
                text: "a".to_string()
            },
            ListItem {
                key: 1,
                text: "b".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_dispatch_then_render_appends_after_prior_items() {
    let store = new_store();
    let list = Todos::new(store.clone());

    store.send(TodoAction::add("walk dog")).await.unwrap();
    let before = list.render().await;

    store.send(TodoAction::add("buy milk")).await.unwrap();
    let after = list.render().await;

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().map(|item| item.text.as_str()), Some("buy milk"));
}

#[tokio::test]
async fn test_empty_submission_renders_empty_item() {
    let store = new_store();
    let mut form = CreateTodo::new(store.clone(), FormConfig::default());

    form.on_change(ChangeEvent::new(""));
    form.on_submit(&mut SubmitEvent::new()).await.unwrap();

    assert_eq!(texts(&Todos::new(store).render().await), vec![""]);
}

#[tokio::test]
async fn test_two_forms_share_one_store() {
    let store = new_store();
    let mut first = CreateTodo::new(store.clone(), FormConfig::default());
    let mut second = CreateTodo::new(store.clone(), FormConfig::default());

    first.on_change(ChangeEvent::new("from first"));
    second.on_change(ChangeEvent::new("from second"));
    second.on_submit(&mut SubmitEvent::new()).await.unwrap();
    first.on_submit(&mut SubmitEvent::new()).await.unwrap();

    assert_eq!(
        texts(&Todos::new(store).render().await),
        vec!["from second", "from first"]
    );
}

#[tokio::test]
async fn test_observer_sees_every_add_in_order() {
    let store = new_store();
    let mut rx = store.subscribe_actions();
    let mut form = CreateTodo::new(store, FormConfig::default());

    for text in ["x", "y"] {
        form.on_change(ChangeEvent::new(text));
        form.on_submit(&mut SubmitEvent::new()).await.unwrap();
    }

    assert_eq!(rx.recv().await.unwrap(), TodoAction::add("x"));
    assert_eq!(rx.recv().await.unwrap(), TodoAction::add("y"));
}

#[tokio::test]
async fn test_state_snapshot_serializes_like_the_store_contract() {
    let store = new_store();
    store.send(TodoAction::add("buy milk")).await.unwrap();

    let json = store
        .state(|s| serde_json::to_string(s))
        .await
        .unwrap();
    assert_eq!(json, r#"{"todos":[{"text":"buy milk"}]}"#);
}

proptest! {
    #[test]
    fn prop_buffer_equals_typed_string(s in ".*") {
        let mut form = CreateTodo::new(new_store(), FormConfig::default());
        form.on_change(ChangeEvent::new(s.clone()));
        prop_assert_eq!(&form.buffer().text, &s);
    }

    #[test]
    fn prop_submits_append_in_order(inputs in prop::collection::vec(".{0,12}", 0..8)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let (stored, rendered) = runtime.block_on(async {
            let store = new_store();
            let mut form = CreateTodo::new(store.clone(), FormConfig::default());
            let list = Todos::new(store.clone());

            for input in &inputs {
                form.on_change(ChangeEvent::new(input.clone()));
                form.on_submit(&mut SubmitEvent::new()).await.unwrap();
            }

            (store.state(|s| s.todos.clone()).await, list.render().await)
        });

        let expected: Vec<Todo> = inputs.iter().map(Todo::new).collect();
        prop_assert_eq!(stored, expected);
        prop_assert_eq!(rendered.len(), inputs.len());
        for (key, (item, input)) in rendered.iter().zip(&inputs).enumerate() {
            prop_assert_eq!(item.key, key);
            prop_assert_eq!(&item.text, input);
        }
    }
}
