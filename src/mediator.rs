//! Mediator
//!
//! Users never talk to each other directly. The `Chat` owns every user and
//! hands out `UserId` indices, which is all a caller needs to send on a
//! user's behalf.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::{PatternError, Result};

static NEXT_CHAT: AtomicU64 = AtomicU64::new(0);

/// Index of a user inside the chat that issued it. Any other chat rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId {
    chat: u64,
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn announce(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} sends: {}", self.name, message)?;
        Ok(())
    }

    pub fn receive(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} receives: {}", self.name, message)?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Chat {
    id: u64,
    users: Vec<User>,
}

impl Default for Chat {
    fn default() -> Self {
        Chat {
            id: NEXT_CHAT.fetch_add(1, Ordering::Relaxed),
            users: Vec::new(),
        }
    }
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant. Registering an equal user twice creates two
    /// participants, and both get every broadcast.
    pub fn add_user(&mut self, user: User) -> UserId {
        self.users.push(user);
        UserId {
            chat: self.id,
            index: self.users.len() - 1,
        }
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        if id.chat != self.id {
            return None;
        }
        self.users.get(id.index)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// `from` says `message` out loud, then the chat relays it.
    pub fn send(&self, from: UserId, message: &str, out: &mut dyn Write) -> Result<Vec<UserId>> {
        let sender = self.user(from).ok_or(PatternError::UnknownUser)?;
        sender.announce(message, out)?;
        self.send_message(message, from, out)
    }

    /// Deliver to every participant except `sender`, in registration order.
    /// Returns who received it. `sender` must belong to this chat.
    pub fn send_message(
        &self,
        message: &str,
        sender: UserId,
        out: &mut dyn Write,
    ) -> Result<Vec<UserId>> {
        if self.user(sender).is_none() {
            return Err(PatternError::UnknownUser);
        }
        let mut delivered = Vec::with_capacity(self.users.len().saturating_sub(1));
        for (index, user) in self.users.iter().enumerate() {
            let id = UserId {
                chat: self.id,
                index,
            };
            if id == sender {
                continue;
            }
            user.receive(message, out)?;
            delivered.push(id);
        }
        debug!(recipients = delivered.len(), "chat message relayed");
        Ok(delivered)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut chat = Chat::new();
    let user1 = chat.add_user(User::new("User1"));
    chat.add_user(User::new("User2"));

    chat.send(user1, "Привіт!", out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sender_does_not_hear_itself() {
        let mut chat = Chat::new();
        let user1 = chat.add_user(User::new("User1"));
        let user2 = chat.add_user(User::new("User2"));

        let mut out = Vec::new();
        let delivered = chat.send(user1, "Привіт!", &mut out).unwrap();

        assert_eq!(chat.len(), 2);
        assert_eq!(chat.user(user2).map(User::name), Some("User2"));
        assert_eq!(delivered, vec![user2]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "User1 sends: Привіт!\nUser2 receives: Привіт!\n"
        );
    }

    #[test]
    fn test_duplicate_registration_duplicates_delivery() {
        let mut chat = Chat::new();
        let alice = chat.add_user(User::new("Alice"));
        chat.add_user(User::new("Bob"));
        chat.add_user(User::new("Bob"));

        let mut out = Vec::new();
        let delivered = chat.send_message("hi", alice, &mut out).unwrap();
        assert_eq!(delivered.len(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Bob receives: hi\nBob receives: hi\n");
    }

    #[test]
    fn test_unknown_sender() {
        let chat = Chat::new();
        assert!(chat.is_empty());
        let stale = UserId {
            chat: chat.id,
            index: 3,
        };
        let result = chat.send(stale, "hello", &mut Vec::new());
        assert!(matches!(result, Err(PatternError::UnknownUser)));
    }

    #[test]
    fn test_id_from_another_chat_is_rejected() {
        let mut lobby = Chat::new();
        let outsider = lobby.add_user(User::new("Outsider"));

        let mut room = Chat::new();
        room.add_user(User::new("Alice"));
        room.add_user(User::new("Bob"));

        assert!(room.user(outsider).is_none());
        let mut out = Vec::new();
        let result = room.send_message("hi", outsider, &mut out);
        assert!(matches!(result, Err(PatternError::UnknownUser)));
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn prop_broadcast_skips_only_sender(count in 1usize..10, pick in 0usize..10) {
            let mut chat = Chat::new();
            let ids: Vec<UserId> = (0..count)
                .map(|i| chat.add_user(User::new(format!("u{i}"))))
                .collect();
            let sender = ids[pick % count];

            let delivered = chat.send_message("msg", sender, &mut Vec::new()).unwrap();
            let expected: Vec<UserId> = ids.into_iter().filter(|id| *id != sender).collect();
            prop_assert_eq!(delivered, expected);
        }
    }
}
