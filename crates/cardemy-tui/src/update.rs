//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects. The submit/completion flow lives here:
//! a submission appends the user cell and a thinking placeholder, returns a
//! `GenerateLesson` effect, and the matching completion removes the
//! placeholder and appends exactly one terminal cell.

use cardemy_core::lesson::{Card, LessonResult};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::carousel::DeckState;
use crate::common::RequestId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::AppState;
use crate::transcript::{self, HistoryCell};

/// Bot reply for any transport, status, or parse failure.
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "Sorry, I'm having difficulties connecting to my brain. Please try again.";

/// Bot reply for a well-formed response with zero cards.
pub const EMPTY_DECK_MESSAGE: &str = "Sorry, I couldn't generate any flashcards for that topic.";

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            state.frame_width = width;
            state.frame_height = height;
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, &term_event),
        UiEvent::LessonCompleted { request, outcome } => {
            handle_lesson_completed(state, request, outcome)
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Enter => submit(state),
        KeyCode::Tab => {
            state.mode = state.mode.toggled();
            vec![]
        }

        // Deck navigation when the topic buffer is empty; cursor movement
        // otherwise.
        KeyCode::Left => {
            if state.input.is_empty() {
                if let Some(deck) = state.transcript.active_deck_mut() {
                    deck.prev();
                }
            } else {
                state.input.move_left();
            }
            vec![]
        }
        KeyCode::Right => {
            if state.input.is_empty() {
                if let Some(deck) = state.transcript.active_deck_mut() {
                    deck.next();
                }
            } else {
                state.input.move_right();
            }
            vec![]
        }
        // Space flips the active deck only while the topic buffer is empty
        // and a deck exists; otherwise it types like any other character, so
        // no topic keystroke is ever swallowed.
        KeyCode::Char(' ') if key.modifiers.is_empty() && state.input.is_empty() => {
            if let Some(deck) = state.transcript.active_deck_mut() {
                deck.flip();
            } else {
                state.input.insert_char(' ');
            }
            vec![]
        }

        KeyCode::Up => {
            let max = scroll_max(state);
            state.transcript.scroll.scroll_up(1, max);
            vec![]
        }
        KeyCode::Down => {
            state.transcript.scroll.scroll_down(1);
            vec![]
        }
        KeyCode::PageUp => {
            let (_, rows) = render::transcript_viewport(state.frame_width, state.frame_height);
            let max = scroll_max(state);
            state.transcript.scroll.scroll_up(rows.max(1), max);
            vec![]
        }
        KeyCode::PageDown => {
            let (_, rows) = render::transcript_viewport(state.frame_width, state.frame_height);
            state.transcript.scroll.scroll_down(rows.max(1));
            vec![]
        }

        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Backspace => {
            state.input.backspace();
            vec![]
        }
        // Plain (or shifted) characters type into the buffer; chords like
        // Ctrl+A or Alt+x must not insert the bare letter.
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Starts one request cycle from the current input buffer.
///
/// Empty or whitespace-only input is a complete no-op: no cells, no effect.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    let Some(topic) = state.input.take_submission() else {
        return vec![];
    };

    state.transcript.greeting_dismissed = true;
    state.transcript.push_cell(HistoryCell::user(topic.clone()));

    let request = state.request_seq.next();
    state.transcript.push_cell(HistoryCell::thinking(request));
    state.in_flight += 1;

    info!(%request, mode = %state.mode, "submitting topic");
    vec![UiEffect::GenerateLesson {
        request,
        topic,
        mode: state.mode,
    }]
}

/// Resolves one request cycle with exactly one terminal cell.
fn handle_lesson_completed(
    state: &mut AppState,
    request: RequestId,
    outcome: LessonResult<Vec<Card>>,
) -> Vec<UiEffect> {
    state.transcript.remove_thinking(request);
    state.in_flight = state.in_flight.saturating_sub(1);

    match outcome {
        Err(error) => {
            warn!(%request, %error, "lesson request failed");
            state
                .transcript
                .push_cell(HistoryCell::bot(CONNECTIVITY_FAILURE_MESSAGE));
        }
        Ok(cards) if cards.is_empty() => {
            info!(%request, "lesson returned no cards");
            state
                .transcript
                .push_cell(HistoryCell::bot(EMPTY_DECK_MESSAGE));
        }
        Ok(cards) => {
            info!(%request, count = cards.len(), "lesson generated");
            state
                .transcript
                .push_cell(HistoryCell::carousel(DeckState::new(cards)));
        }
    }
    vec![]
}

/// Upper bound for scrolling back: rendered lines beyond the viewport.
fn scroll_max(state: &AppState) -> usize {
    let (width, rows) = render::transcript_viewport(state.frame_width, state.frame_height);
    let total = transcript::render_transcript(&state.transcript, width, "◐").len();
    total.saturating_sub(rows)
}

#[cfg(test)]
mod tests {
    use cardemy_core::lesson::{LearnMode, LessonError, LessonErrorKind};

    use super::*;

    fn new_state() -> AppState {
        AppState::new(LearnMode::Revision)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            state,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_topic(state: &mut AppState, topic: &str) {
        for c in topic.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn submit_topic(state: &mut AppState, topic: &str) -> RequestId {
        type_topic(state, topic);
        let effects = press(state, KeyCode::Enter);
        match effects.as_slice() {
            [UiEffect::GenerateLesson { request, .. }] => *request,
            other => panic!("expected one GenerateLesson effect, got {other:?}"),
        }
    }

    fn complete(state: &mut AppState, request: RequestId, outcome: LessonResult<Vec<Card>>) {
        let effects = update(state, UiEvent::LessonCompleted { request, outcome });
        assert!(effects.is_empty());
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                front: format!("front {i}"),
                back: format!("back {i}"),
            })
            .collect()
    }

    fn last_deck(state: &mut AppState) -> &mut DeckState {
        state.transcript.active_deck_mut().expect("deck expected")
    }

    #[test]
    fn submit_appends_user_and_thinking_and_returns_effect() {
        let mut state = new_state();
        type_topic(&mut state, "Photosynthesis");
        let effects = press(&mut state, KeyCode::Enter);

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::GenerateLesson { topic, mode, .. }]
                if topic == "Photosynthesis" && *mode == LearnMode::Revision
        ));
        assert!(matches!(
            state.transcript.cells(),
            [HistoryCell::User { .. }, HistoryCell::Thinking { .. }]
        ));
        assert!(state.input.is_empty());
        assert!(state.transcript.greeting_dismissed);
        assert!(state.is_busy());
    }

    #[test]
    fn empty_submit_is_a_total_no_op() {
        let mut state = new_state();
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(state.transcript.cells().is_empty());
        assert!(!state.transcript.greeting_dismissed);

        type_topic(&mut state, "   ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(state.transcript.cells().is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn tab_toggles_mode_for_next_submission() {
        let mut state = new_state();
        press(&mut state, KeyCode::Tab);
        type_topic(&mut state, "Rust");
        let effects = press(&mut state, KeyCode::Enter);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::GenerateLesson { mode: LearnMode::Learning, .. }]
        ));
    }

    // End-to-end scenario: one card returned.
    #[test]
    fn single_card_response_renders_one_card_deck() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "Photosynthesis");
        complete(
            &mut state,
            request,
            Ok(vec![Card {
                front: "What is photosynthesis?".to_string(),
                back: "Process converting light to chemical energy".to_string(),
            }]),
        );

        assert!(matches!(
            state.transcript.cells(),
            [HistoryCell::User { .. }, HistoryCell::Carousel { .. }]
        ));
        let deck = last_deck(&mut state);
        assert_eq!(deck.counter_text(), "Card 1 of 1");
        assert!(!deck.can_prev());
        assert!(!deck.can_next());
        assert!(!state.is_busy());
    }

    // End-to-end scenario: three cards, counter cycles with navigation.
    #[test]
    fn three_card_deck_navigates_with_counter() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "Photosynthesis");
        complete(&mut state, request, Ok(cards(3)));

        press(&mut state, KeyCode::Right);
        assert_eq!(last_deck(&mut state).counter_text(), "Card 2 of 3");
        press(&mut state, KeyCode::Right);
        let deck = last_deck(&mut state);
        assert_eq!(deck.counter_text(), "Card 3 of 3");
        assert!(deck.can_prev());
        assert!(!deck.can_next());

        // Bounded: a further Right is a no-op.
        press(&mut state, KeyCode::Right);
        assert_eq!(last_deck(&mut state).counter_text(), "Card 3 of 3");
    }

    // End-to-end scenario: server failure.
    #[test]
    fn failure_resolves_to_fixed_connectivity_message() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "Photosynthesis");
        complete(
            &mut state,
            request,
            Err(LessonError::http_status(500, "internal")),
        );

        assert!(matches!(
            state.transcript.cells(),
            [HistoryCell::User { .. }, HistoryCell::Bot { text }]
                if text == CONNECTIVITY_FAILURE_MESSAGE
        ));
    }

    // End-to-end scenario: empty deck.
    #[test]
    fn empty_card_list_resolves_to_fixed_empty_message() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "Photosynthesis");
        complete(&mut state, request, Ok(vec![]));

        assert!(matches!(
            state.transcript.cells(),
            [HistoryCell::User { .. }, HistoryCell::Bot { text }]
                if text == EMPTY_DECK_MESSAGE
        ));
    }

    #[test]
    fn every_failure_kind_maps_to_the_same_message() {
        for kind in [
            LessonErrorKind::Timeout,
            LessonErrorKind::Transport,
            LessonErrorKind::Parse,
        ] {
            let mut state = new_state();
            let request = submit_topic(&mut state, "topic");
            complete(&mut state, request, Err(LessonError::new(kind, "boom")));
            assert!(matches!(
                state.transcript.cells().last(),
                Some(HistoryCell::Bot { text }) if text == CONNECTIVITY_FAILURE_MESSAGE
            ));
        }
    }

    #[test]
    fn overlapping_cycles_complete_independently_in_arrival_order() {
        let mut state = new_state();
        let first = submit_topic(&mut state, "alpha");
        let second = submit_topic(&mut state, "beta");
        assert_ne!(first, second);
        assert_eq!(state.in_flight, 2);

        // Two independent placeholders are live.
        let thinking = state
            .transcript
            .cells()
            .iter()
            .filter(|c| matches!(c, HistoryCell::Thinking { .. }))
            .count();
        assert_eq!(thinking, 2);

        // The second cycle completes first; only its placeholder is removed.
        complete(&mut state, second, Ok(cards(2)));
        assert!(state.transcript.cells().iter().any(
            |c| matches!(c, HistoryCell::Thinking { request } if *request == first)
        ));
        assert!(matches!(
            state.transcript.cells().last(),
            Some(HistoryCell::Carousel { .. })
        ));

        complete(&mut state, first, Ok(vec![]));
        assert!(matches!(
            state.transcript.cells().last(),
            Some(HistoryCell::Bot { text }) if text == EMPTY_DECK_MESSAGE
        ));
        assert!(
            !state
                .transcript
                .cells()
                .iter()
                .any(|c| matches!(c, HistoryCell::Thinking { .. }))
        );
        assert!(!state.is_busy());
    }

    #[test]
    fn exactly_one_terminal_cell_per_cycle() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "topic");
        complete(&mut state, request, Ok(cards(2)));

        // user + carousel, placeholder gone
        assert_eq!(state.transcript.cells().len(), 2);
    }

    #[test]
    fn arrow_keys_edit_buffer_while_typing() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "topic");
        complete(&mut state, request, Ok(cards(3)));

        // With text in the buffer, Left/Right move the cursor, not the deck.
        type_topic(&mut state, "next");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Right);
        assert_eq!(last_deck(&mut state).counter_text(), "Card 1 of 3");

        // Space types into the buffer instead of flipping.
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.input.text(), "next ");
        assert!(!last_deck(&mut state).is_flipped());
    }

    #[test]
    fn space_flips_the_latest_deck_when_input_empty() {
        let mut state = new_state();
        let request = submit_topic(&mut state, "topic");
        complete(&mut state, request, Ok(cards(2)));

        press(&mut state, KeyCode::Char(' '));
        assert!(last_deck(&mut state).is_flipped());
        press(&mut state, KeyCode::Char(' '));
        assert!(!last_deck(&mut state).is_flipped());

        // Navigating away resets the flip.
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Right);
        assert!(!last_deck(&mut state).is_flipped());
    }

    #[test]
    fn letters_always_type_even_with_a_deck_present() {
        // Fresh state: the first keystroke of a topic like "fractions" must
        // land in the buffer, not be swallowed by a flip binding.
        let mut state = new_state();
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(state.input.text(), "f");

        // With a deck on screen and an empty buffer, 'f' still types and
        // never flips.
        let mut state = new_state();
        let request = submit_topic(&mut state, "topic");
        complete(&mut state, request, Ok(cards(2)));
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(state.input.text(), "f");
        assert!(!last_deck(&mut state).is_flipped());
    }

    #[test]
    fn space_types_when_no_deck_exists() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.input.text(), " ");
        // Still a no-op submission: the buffer trims to empty.
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(state.transcript.cells().is_empty());
    }

    #[test]
    fn modified_chords_do_not_insert_characters() {
        let mut state = new_state();
        for modifier in [KeyModifiers::ALT, KeyModifiers::CONTROL] {
            let chord = UiEvent::Terminal(Event::Key(KeyEvent::new(KeyCode::Char('x'), modifier)));
            update(&mut state, chord);
        }
        assert!(state.input.is_empty());

        // Shifted characters still type.
        let shifted = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('X'),
            KeyModifiers::SHIFT,
        )));
        update(&mut state, shifted);
        assert_eq!(state.input.text(), "X");
    }

    #[test]
    fn navigation_keys_ignore_earlier_decks() {
        let mut state = new_state();
        let first = submit_topic(&mut state, "one");
        complete(&mut state, first, Ok(cards(3)));
        press(&mut state, KeyCode::Right);

        let second = submit_topic(&mut state, "two");
        complete(&mut state, second, Ok(cards(2)));
        press(&mut state, KeyCode::Right);

        // New deck moved; old deck still where it was left.
        assert_eq!(last_deck(&mut state).counter_text(), "Card 2 of 2");
        if let HistoryCell::Carousel { deck } = &state.transcript.cells()[1] {
            assert_eq!(deck.current_index(), 1);
        } else {
            panic!("expected first carousel at index 1");
        }
    }

    #[test]
    fn quit_keys_return_quit_effect() {
        let mut state = new_state();
        assert_eq!(press(&mut state, KeyCode::Esc), vec![UiEffect::Quit]);

        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(update(&mut state, ctrl_c), vec![UiEffect::Quit]);
    }

    #[test]
    fn tick_advances_spinner() {
        let mut state = new_state();
        let before = state.spinner_frame;
        update(&mut state, UiEvent::Tick);
        assert_eq!(state.spinner_frame, before + 1);
    }

    #[test]
    fn frame_event_records_viewport() {
        let mut state = new_state();
        update(
            &mut state,
            UiEvent::Frame {
                width: 120,
                height: 40,
            },
        );
        assert_eq!((state.frame_width, state.frame_height), (120, 40));
    }
}
