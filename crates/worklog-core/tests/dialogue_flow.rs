//! End-to-end dialogues through the public core API.

use worklog_core::category::{CategoryRegistry, InMemoryCategoryRepository};
use worklog_core::dialogue::{keyboard, DialogueEngine};
use worklog_core::inflect::inflect;
use worklog_types::config::DEFAULT_CATEGORIES;
use worklog_types::dialogue::{Stage, WorkType};
use worklog_types::entry::UserId;
use worklog_types::event::{Callback, CategoryChoice, Event, MenuAction};

type Engine = DialogueEngine<InMemoryCategoryRepository>;

fn engine() -> Engine {
    let defaults = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    DialogueEngine::new(CategoryRegistry::new(
        InMemoryCategoryRepository::new(),
        defaults,
    ))
}

fn press(cb: Callback) -> Event {
    Event::Callback(cb)
}

fn say(text: &str) -> Event {
    Event::Text(text.to_string())
}

/// Run a complete "add record" dialogue, ending with `last`.
async fn add_record(engine: &mut Engine, user: UserId, category: &str, qty: &str, last: Event) {
    let steps = [
        Event::Start,
        press(Callback::Menu(MenuAction::Add)),
        press(Callback::WorkType(WorkType::Installation)),
        press(Callback::Category(CategoryChoice::Existing(category.to_string()))),
        say(qty),
        last,
    ];
    for step in steps {
        let reply = engine.handle(user, step).await.unwrap();
        assert!(reply.is_some());
    }
}

#[tokio::test]
async fn session_round_trip_records_one_entry() {
    let mut engine = engine();
    let user = UserId(1);

    add_record(&mut engine, user, "Облако", "3", say("https://x")).await;

    let entries = engine.records().list(user);
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].text,
        format!("Монтаж 3 {}", inflect("Облако", 3))
    );
    assert_eq!(entries[0].text, "Монтаж 3 Облака");
    assert_eq!(entries[0].link.as_deref(), Some("https://x"));
    assert_eq!(engine.stage(user), Stage::Idle);
}

#[tokio::test]
async fn skipping_or_plain_text_leaves_no_link() {
    let mut engine = engine();
    let user = UserId(1);

    add_record(&mut engine, user, "Сервер", "1", press(Callback::SkipLink)).await;
    add_record(&mut engine, user, "Сервер", "21", say("потом скину")).await;

    let entries = engine.records().list(user);
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.link.is_none()));
    assert_eq!(entries[1].text, "Монтаж 21 Сервер");
}

#[tokio::test]
async fn non_digit_quantity_keeps_waiting() {
    let mut engine = engine();
    let user = UserId(1);

    for step in [
        press(Callback::Menu(MenuAction::Add)),
        press(Callback::WorkType(WorkType::Removal)),
        press(Callback::Category(CategoryChoice::Existing("Сервер".into()))),
    ] {
        engine.handle(user, step).await.unwrap();
    }
    let reply = engine.handle(user, say("abc")).await.unwrap().unwrap();

    assert_eq!(reply.text, "Введи число.");
    assert_eq!(engine.stage(user), Stage::AwaitingQuantity);
    assert!(engine.records().list(user).is_empty());
}

#[tokio::test]
async fn deleting_by_position_recomputes_indices() {
    let mut engine = engine();
    let user = UserId(1);
    add_record(&mut engine, user, "Сервер", "2", press(Callback::SkipLink)).await;
    add_record(&mut engine, user, "Облако", "5", press(Callback::SkipLink)).await;
    let second = engine.records().list(user)[1].clone();

    let reply = engine
        .handle(user, press(Callback::Remove(0)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, "Удалено: Монтаж 2 Сервера");
    assert_eq!(engine.records().list(user), &[second.clone()]);

    let reply = engine
        .handle(user, press(Callback::Remove(0)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, format!("Удалено: {}", second.text));
    assert!(engine.records().list(user).is_empty());

    let reply = engine
        .handle(user, press(Callback::Remove(0)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, "Ошибка.");
    assert_eq!(reply.keyboard, Some(keyboard::main_menu()));
}

#[tokio::test]
async fn custom_category_is_persisted_once_and_offered_next_time() {
    let mut engine = engine();
    let user = UserId(1);

    for _ in 0..2 {
        for step in [
            press(Callback::Menu(MenuAction::Add)),
            press(Callback::WorkType(WorkType::Installation)),
            press(Callback::Category(CategoryChoice::Custom)),
            say("Патч-панель"),
            say("2"),
            press(Callback::SkipLink),
        ] {
            engine.handle(user, step).await.unwrap();
        }
    }

    let stored = engine.categories().repository().stored().unwrap();
    assert_eq!(stored.iter().filter(|c| *c == "Патч-панель").count(), 1);

    engine
        .handle(user, press(Callback::Menu(MenuAction::Add)))
        .await
        .unwrap();
    let reply = engine
        .handle(user, press(Callback::WorkType(WorkType::Installation)))
        .await
        .unwrap()
        .unwrap();
    let offered = reply
        .keyboard
        .unwrap()
        .buttons()
        .any(|b| b.callback == Callback::Category(CategoryChoice::Existing("Патч-панель".into())));
    assert!(offered);
}

#[tokio::test]
async fn clearing_one_user_keeps_the_other() {
    let mut engine = engine();
    let alice = UserId(1);
    let bob = UserId(2);
    add_record(&mut engine, alice, "Сервер", "2", press(Callback::SkipLink)).await;
    add_record(&mut engine, bob, "Сервер", "3", press(Callback::SkipLink)).await;

    engine
        .handle(alice, press(Callback::Menu(MenuAction::Clear)))
        .await
        .unwrap();

    assert!(engine.records().list(alice).is_empty());
    assert_eq!(engine.records().list(bob).len(), 1);
}

#[tokio::test]
async fn summary_numbers_entries_and_appends_links() {
    let mut engine = engine();
    let user = UserId(1);
    add_record(&mut engine, user, "Кроссировка", "12", say("http://a")).await;
    add_record(&mut engine, user, "Конструктив", "3", press(Callback::SkipLink)).await;

    let reply = engine
        .handle(user, press(Callback::Menu(MenuAction::Final)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        reply.text,
        "1) Монтаж 12 Кроссировкок - http://a\n\n2) Монтаж 3 Конструктива"
    );
}
