use crate::domains::carousel::CarouselMessage;
use crate::domains::contact::ContactMessage;
use crate::domains::navigation::NavigationMessage;
use crate::domains::projects::ProjectsMessage;
use crate::domains::reveal::RevealMessage;
use crate::scheduler::TimerEvent;

/// Every input the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigation(NavigationMessage),
    Carousel(CarouselMessage),
    Projects(ProjectsMessage),
    Contact(ContactMessage),
    Reveal(RevealMessage),
    Timer(TimerEvent),
    KeyPressed(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<NavigationMessage> for Message {
    fn from(message: NavigationMessage) -> Self {
        Message::Navigation(message)
    }
}

impl From<CarouselMessage> for Message {
    fn from(message: CarouselMessage) -> Self {
        Message::Carousel(message)
    }
}

impl From<ProjectsMessage> for Message {
    fn from(message: ProjectsMessage) -> Self {
        Message::Projects(message)
    }
}

impl From<ContactMessage> for Message {
    fn from(message: ContactMessage) -> Self {
        Message::Contact(message)
    }
}

impl From<RevealMessage> for Message {
    fn from(message: RevealMessage) -> Self {
        Message::Reveal(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_key_names() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Other);
        assert_eq!(Key::from_name("escape"), Key::Other);
    }
}
