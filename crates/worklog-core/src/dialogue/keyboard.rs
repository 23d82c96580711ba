//! Button layouts shown under dialogue replies.

use worklog_types::dialogue::WorkType;
use worklog_types::event::{Callback, CategoryChoice, MenuAction};
use worklog_types::reply::{Button, Keyboard};

/// Categories per row on the category menu.
const CATEGORIES_PER_ROW: usize = 2;

fn cancel_button() -> Button {
    Button::new("Отмена", Callback::Menu(MenuAction::Cancel))
}

/// Main menu: add / delete on the first row, summary / clear on the second.
pub fn main_menu() -> Keyboard {
    Keyboard::new(vec![
        vec![
            Button::new("➕ Добавить", Callback::Menu(MenuAction::Add)),
            Button::new("❌ Удалить запись", Callback::Menu(MenuAction::Delete)),
        ],
        vec![
            Button::new("✅ Получить итог", Callback::Menu(MenuAction::Final)),
            Button::new("🧹 Очистить всё", Callback::Menu(MenuAction::Clear)),
        ],
    ])
}

pub fn work_type_menu() -> Keyboard {
    let choices = WorkType::ALL
        .iter()
        .map(|wt| Button::new(wt.label(), Callback::WorkType(*wt)))
        .collect();
    Keyboard::new(vec![choices, vec![cancel_button()]])
}

/// Known categories two per row, then "custom", then cancel.
pub fn category_menu(categories: &[String]) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = categories
        .chunks(CATEGORIES_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|name| {
                    Button::new(
                        name.clone(),
                        Callback::Category(CategoryChoice::Existing(name.clone())),
                    )
                })
                .collect()
        })
        .collect();
    rows.push(vec![Button::new(
        "➕ Своя услуга",
        Callback::Category(CategoryChoice::Custom),
    )]);
    rows.push(vec![cancel_button()]);
    Keyboard::new(rows)
}

pub fn skip_link_menu() -> Keyboard {
    Keyboard::new(vec![vec![Button::new("Пропустить", Callback::SkipLink)]])
}

/// One "delete N" button per entry (1-based labels, 0-based payloads).
pub fn delete_menu(entry_count: usize) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = (0..entry_count)
        .map(|idx| vec![Button::new(format!("Удалить {}", idx + 1), Callback::Remove(idx))])
        .collect();
    rows.push(vec![Button::new(
        "Отмена",
        Callback::Menu(MenuAction::CancelDelete),
    )]);
    Keyboard::new(rows)
}
