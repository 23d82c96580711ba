//! Per-user dialogue state machine.
//!
//! Every legal transition is one arm of the `match` in
//! [`DialogueEngine::handle`]. Menu actions (delete, summary, clear, remove)
//! work from any stage and leave the session alone; stage-specific events
//! arriving in the wrong stage are ignored and produce no reply.
//!
//! ```text
//! Idle -add-> AwaitingWorkType -work-> AwaitingCategory -existing-> AwaitingQuantity
//!                                          |                          ^
//!                                          +-custom-> AwaitingCustomCategory
//! AwaitingQuantity -digits-> AwaitingLink -text|skip-> Idle (entry stored)
//! any -cancel|start-> Idle
//! ```

use std::collections::HashMap;

use tracing::{debug, info, warn};

use worklog_types::dialogue::{Stage, UserSession, WorkType};
use worklog_types::entry::{LogEntry, UserId};
use worklog_types::error::DialogueError;
use worklog_types::event::{Callback, CategoryChoice, Event, MenuAction};
use worklog_types::reply::Reply;

use crate::category::{CategoryRegistry, CategoryRepository};
use crate::inflect::inflect;
use crate::record::RecordStore;

use super::keyboard;
use super::summary::render_summary;

const GREETING: &str = "Привет! Выбери действие:";
const ASK_WORK_TYPE: &str = "Выбери тип работы:";
const ASK_CATEGORY: &str = "Выбери услугу:";
const ASK_CUSTOM_CATEGORY: &str = "Введи название новой услуги:";
const ASK_QUANTITY: &str = "Сколько штук?";
const ASK_QUANTITY_AGAIN: &str = "Введи число.";
const ASK_LINK: &str = "Прикрепи ссылку или нажми «Пропустить»:";
const CANCELLED: &str = "Отменено.";
const ASK_DELETE: &str = "Выбери запись для удаления:";
const NOTHING_TO_DELETE: &str = "Нет записей для удаления.";
const NO_ENTRIES: &str = "Нет записей.";
const CLEARED: &str = "Все записи очищены.";
const DELETE_FAILED: &str = "Ошибка.";

/// Owns every piece of per-process dialogue state.
///
/// Created once at startup and dropped at exit; nothing here is persisted
/// except the category list, which goes through the registry.
pub struct DialogueEngine<R: CategoryRepository> {
    sessions: HashMap<UserId, UserSession>,
    records: RecordStore,
    categories: CategoryRegistry<R>,
}

impl<R: CategoryRepository> DialogueEngine<R> {
    pub fn new(categories: CategoryRegistry<R>) -> Self {
        Self {
            sessions: HashMap::new(),
            records: RecordStore::new(),
            categories,
        }
    }

    /// Current session of `user`, if a dialogue is in progress.
    pub fn session(&self, user: UserId) -> Option<&UserSession> {
        self.sessions.get(&user)
    }

    pub fn stage(&self, user: UserId) -> Stage {
        self.sessions
            .get(&user)
            .map(|s| s.stage)
            .unwrap_or_default()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn categories(&self) -> &CategoryRegistry<R> {
        &self.categories
    }

    /// Apply one inbound event for `user`.
    ///
    /// Returns `Ok(None)` when the event does not apply to the user's
    /// current stage. On `Err` the session is left as it was before the event.
    pub async fn handle(
        &mut self,
        user: UserId,
        event: Event,
    ) -> Result<Option<Reply>, DialogueError> {
        let stage = self.stage(user);
        debug!(%user, %stage, ?event, "dialogue event");

        let reply = match (stage, event) {
            (_, Event::Start) => {
                self.sessions.remove(&user);
                Reply::with_keyboard(GREETING, keyboard::main_menu())
            }
            (_, Event::Callback(Callback::Menu(action))) => self.menu(user, action),
            (_, Event::Callback(Callback::Remove(index))) => self.remove_entry(user, index),
            (Stage::AwaitingWorkType, Event::Callback(Callback::WorkType(work_type))) => {
                self.select_work_type(user, work_type).await?
            }
            (Stage::AwaitingCategory, Event::Callback(Callback::Category(choice))) => {
                self.select_category(user, choice)
            }
            (Stage::AwaitingCustomCategory, Event::Text(text)) => {
                self.add_custom_category(user, &text).await?
            }
            (Stage::AwaitingQuantity, Event::Text(text)) => self.set_quantity(user, &text),
            (Stage::AwaitingLink, Event::Text(text)) => self.finish(user, link_from_text(&text)),
            (Stage::AwaitingLink, Event::Callback(Callback::SkipLink)) => self.finish(user, None),
            (stage, event) => {
                debug!(%user, %stage, ?event, "event not applicable in current stage");
                return Ok(None);
            }
        };

        Ok(Some(reply))
    }

    fn menu(&mut self, user: UserId, action: MenuAction) -> Reply {
        match action {
            MenuAction::Add => {
                self.sessions.insert(user, UserSession::begin());
                Reply::with_keyboard(ASK_WORK_TYPE, keyboard::work_type_menu())
            }
            MenuAction::Delete => {
                let count = self.records.len(user);
                if count == 0 {
                    Reply::with_keyboard(NOTHING_TO_DELETE, keyboard::main_menu())
                } else {
                    Reply::with_keyboard(ASK_DELETE, keyboard::delete_menu(count))
                }
            }
            MenuAction::Final => {
                let entries = self.records.list(user);
                if entries.is_empty() {
                    Reply::with_keyboard(NO_ENTRIES, keyboard::main_menu())
                } else {
                    Reply::with_keyboard(render_summary(entries), keyboard::main_menu())
                }
            }
            MenuAction::Clear => {
                self.records.clear(user);
                info!(%user, "entries cleared");
                Reply::with_keyboard(CLEARED, keyboard::main_menu())
            }
            MenuAction::Cancel | MenuAction::CancelDelete => {
                self.sessions.remove(&user);
                Reply::with_keyboard(CANCELLED, keyboard::main_menu())
            }
        }
    }

    fn remove_entry(&mut self, user: UserId, index: usize) -> Reply {
        match self.records.remove_at(user, index) {
            Ok(removed) => {
                info!(%user, index, "entry removed");
                Reply::with_keyboard(format!("Удалено: {}", removed.text), keyboard::main_menu())
            }
            Err(e) => {
                debug!(%user, error = %e, "remove rejected");
                Reply::with_keyboard(DELETE_FAILED, keyboard::main_menu())
            }
        }
    }

    async fn select_work_type(
        &mut self,
        user: UserId,
        work_type: WorkType,
    ) -> Result<Reply, DialogueError> {
        let categories = self.categories.load().await?;
        let session = self.sessions.entry(user).or_default();
        session.work_type = Some(work_type);
        session.stage = Stage::AwaitingCategory;
        Ok(Reply::with_keyboard(
            ASK_CATEGORY,
            keyboard::category_menu(&categories),
        ))
    }

    fn select_category(&mut self, user: UserId, choice: CategoryChoice) -> Reply {
        let session = self.sessions.entry(user).or_default();
        match choice {
            CategoryChoice::Custom => {
                session.stage = Stage::AwaitingCustomCategory;
                Reply::text(ASK_CUSTOM_CATEGORY)
            }
            CategoryChoice::Existing(name) => {
                session.category = Some(name);
                session.stage = Stage::AwaitingQuantity;
                Reply::text(ASK_QUANTITY)
            }
        }
    }

    async fn add_custom_category(
        &mut self,
        user: UserId,
        text: &str,
    ) -> Result<Reply, DialogueError> {
        let name = text.trim();
        self.categories.add_if_absent(name).await?;

        let session = self.sessions.entry(user).or_default();
        session.category = Some(name.to_string());
        session.stage = Stage::AwaitingQuantity;
        Ok(Reply::text(format!(
            "Новая услуга «{name}» добавлена. Теперь введи количество:"
        )))
    }

    fn set_quantity(&mut self, user: UserId, text: &str) -> Reply {
        let Some(count) = parse_quantity(text) else {
            return Reply::text(ASK_QUANTITY_AGAIN);
        };

        let session = self.sessions.entry(user).or_default();
        let (Some(work_type), Some(category)) = (session.work_type, session.category.as_deref())
        else {
            warn!(%user, "quantity received without work type or category, resetting");
            return self.reset(user);
        };

        session.pending_record = Some(format!(
            "{work_type} {count} {}",
            inflect(category, count)
        ));
        session.stage = Stage::AwaitingLink;
        Reply::with_keyboard(ASK_LINK, keyboard::skip_link_menu())
    }

    fn finish(&mut self, user: UserId, link: Option<String>) -> Reply {
        let Some(record) = self
            .sessions
            .remove(&user)
            .and_then(|session| session.pending_record)
        else {
            warn!(%user, "link stage reached without a pending record, resetting");
            return self.reset(user);
        };

        let entry = LogEntry::new(user, record, link);
        let confirmation = entry.display_line();
        self.records.append(user, entry);
        info!(%user, total = self.records.len(user), "entry recorded");

        Reply::with_keyboard(confirmation, keyboard::main_menu())
    }

    fn reset(&mut self, user: UserId) -> Reply {
        self.sessions.remove(&user);
        Reply::with_keyboard(CANCELLED, keyboard::main_menu())
    }
}

/// Accept only a non-empty run of ASCII digits that fits in an `i64`.
fn parse_quantity(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Text starting with "http" (any case) is a link; anything else means "no link".
fn link_from_text(text: &str) -> Option<String> {
    let text = text.trim();
    let is_link = text
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"));
    is_link.then(|| text.to_string())
}
