//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key can mean different things
//! depending on which panel has focus, so mapping takes an [`InputContext`].

use crossterm::event::KeyCode;

use super::messages::AppMsg;
use super::state::{FooterSection, RatingFilter};

/// Where key presses are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The review panel has focus.
    Reviews,
    /// The footer panel has focus.
    Footer,
    /// The image zoom overlay is open.
    Zoom,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Zoom => map_zoom_key(key.key),
        InputContext::Reviews => map_global_key(key.key).or_else(|| map_review_key(key.key)),
        InputContext::Footer => map_global_key(key.key).or_else(|| map_footer_key(key.key)),
    }
}

/// Maps a key using the review panel context.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    map_key_to_message_with_context(key, InputContext::Reviews)
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_global_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::SwitchPanel),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        _ => None,
    }
}

fn map_review_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('h' | 'p') | KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PreviousPage),
        KeyCode::Char('l' | 'n') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('g') | KeyCode::Home => Some(AppMsg::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(AppMsg::LastPage),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('0') => Some(AppMsg::SetFilter(RatingFilter::All)),
        KeyCode::Char('i') => Some(AppMsg::SetFilter(RatingFilter::HasImage)),
        KeyCode::Char(digit @ '1'..='5') => star_filter(digit).map(AppMsg::SetFilter),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::ToggleComment),
        KeyCode::Char('z') => Some(AppMsg::OpenZoom),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_footer_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('a') => Some(AppMsg::ToggleSection(FooterSection::About)),
        KeyCode::Char('s') => Some(AppMsg::ToggleSection(FooterSection::Services)),
        KeyCode::Char('c') => Some(AppMsg::ToggleSection(FooterSection::Contact)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_zoom_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::ZoomPrevious),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::ZoomNext),
        KeyCode::Esc | KeyCode::Char('z') => Some(AppMsg::CloseZoom),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn star_filter(digit: char) -> Option<RatingFilter> {
    digit
        .to_digit(10)
        .and_then(|value| u8::try_from(value).ok())
        .and_then(RatingFilter::stars)
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::KeyModifiers;
    use rstest::rstest;

    use super::*;

    fn key_msg(key: KeyCode) -> KeyMsg {
        KeyMsg {
            key,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn mapped(key: KeyCode, context: InputContext) -> Option<String> {
        map_key_to_message_with_context(&key_msg(key), context).map(|msg| format!("{msg:?}"))
    }

    #[rstest]
    #[case(KeyCode::Char('j'), "CursorDown")]
    #[case(KeyCode::Up, "CursorUp")]
    #[case(KeyCode::Char('l'), "NextPage")]
    #[case(KeyCode::Char('p'), "PreviousPage")]
    #[case(KeyCode::Char('G'), "LastPage")]
    #[case(KeyCode::Char('i'), "SetFilter(HasImage)")]
    #[case(KeyCode::Char('4'), "SetFilter(Stars(4))")]
    #[case(KeyCode::Enter, "ToggleComment")]
    #[case(KeyCode::Tab, "SwitchPanel")]
    fn review_keys(#[case] key: KeyCode, #[case] expected: &str) {
        assert_eq!(mapped(key, InputContext::Reviews).as_deref(), Some(expected));
    }

    #[rstest]
    #[case(KeyCode::Char('6'))]
    #[case(KeyCode::Char('a'))]
    fn unmapped_review_keys_are_ignored(#[case] key: KeyCode) {
        assert_eq!(mapped(key, InputContext::Reviews), None);
    }

    #[rstest]
    #[case(KeyCode::Char('a'), "ToggleSection(About)")]
    #[case(KeyCode::Char('s'), "ToggleSection(Services)")]
    #[case(KeyCode::Char('c'), "ToggleSection(Contact)")]
    #[case(KeyCode::Char('r'), "RefreshRequested")]
    fn footer_keys(#[case] key: KeyCode, #[case] expected: &str) {
        assert_eq!(mapped(key, InputContext::Footer).as_deref(), Some(expected));
    }

    #[test]
    fn footer_ignores_review_navigation() {
        assert_eq!(mapped(KeyCode::Char('j'), InputContext::Footer), None);
    }

    #[rstest]
    #[case(KeyCode::Char('h'), "ZoomPrevious")]
    #[case(KeyCode::Right, "ZoomNext")]
    #[case(KeyCode::Esc, "CloseZoom")]
    fn zoom_keys(#[case] key: KeyCode, #[case] expected: &str) {
        assert_eq!(mapped(key, InputContext::Zoom).as_deref(), Some(expected));
    }

    #[test]
    fn zoom_captures_tab() {
        assert_eq!(mapped(KeyCode::Tab, InputContext::Zoom), None);
    }
}
