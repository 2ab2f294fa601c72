//! Session chat log.
//!
//! Holds what the fishermen's chat panel shows: player messages and catch
//! announcements. Nothing is sent anywhere; the log lives with the session.

use std::collections::VecDeque;

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::constants::{ANNOUNCER_NAME, MAX_CHAT_MESSAGES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    /// Local time formatted as HH:MM
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn format_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

impl ChatLog {
    pub fn empty() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }

    /// Chat with the welcome conversation already in it.
    pub fn seeded() -> Self {
        let mut log = Self::empty();
        for (author, text, hour, minute) in [
            ("😊 РыбакПро", "Привет всем! Кто поймал что-то крутое?", 14, 23),
            ("🎣 МастерУдочки", "Только что поймал Радужного Пузырька!", 14, 25),
            ("🐠 НептунчикFish", "У меня есть Смеющийся Судак на обмен", 14, 27),
        ] {
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                log.push(author, text.to_string(), time);
            }
        }
        log
    }

    fn push(&mut self, author: &str, text: String, time: NaiveTime) {
        if self.messages.len() >= MAX_CHAT_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(ChatMessage {
            author: author.to_string(),
            text,
            time: format_time(time),
        });
    }

    /// Posts a player message at the given time. Blank messages are dropped.
    ///
    /// Returns true if the message was added.
    pub fn send_at(&mut self, author: &str, text: &str, time: NaiveTime) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(author, text.to_string(), time);
        true
    }

    /// Posts a player message stamped with the current local time.
    pub fn send(&mut self, author: &str, text: &str) -> bool {
        self.send_at(author, text, Local::now().time())
    }

    /// Posts a system announcement stamped with the current local time.
    pub fn announce(&mut self, text: &str) {
        self.push(ANNOUNCER_NAME, text.to_string(), Local::now().time());
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_seeded_log_has_welcome_messages() {
        let log = ChatLog::seeded();
        assert_eq!(log.len(), 3);
        let first = log.messages().next().unwrap();
        assert_eq!(first.author, "😊 РыбакПро");
        assert_eq!(first.time, "14:23");
    }

    #[test]
    fn test_send_trims_and_stamps() {
        let mut log = ChatLog::empty();
        assert!(log.send_at("😊 Ты", "  Клюёт!  ", at(9, 5)));
        let message = log.last().unwrap();
        assert_eq!(message.text, "Клюёт!");
        assert_eq!(message.time, "09:05");
    }

    #[test]
    fn test_blank_messages_ignored() {
        let mut log = ChatLog::empty();
        assert!(!log.send_at("😊 Ты", "", at(9, 5)));
        assert!(!log.send_at("😊 Ты", "   \n\t", at(9, 5)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = ChatLog::empty();
        for i in 0..(MAX_CHAT_MESSAGES + 5) {
            log.send_at("A", &format!("message {}", i), at(10, 0));
        }
        assert_eq!(log.len(), MAX_CHAT_MESSAGES);
        assert_eq!(log.messages().next().unwrap().text, "message 5");
    }

    #[test]
    fn test_announce_uses_system_author() {
        let mut log = ChatLog::empty();
        log.announce("🎉 улов!");
        let message = log.last().unwrap();
        assert_eq!(message.author, ANNOUNCER_NAME);
        assert_eq!(message.text, "🎉 улов!");
        assert_eq!(message.time.len(), 5);
    }
}
