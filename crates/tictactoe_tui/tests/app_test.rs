//! Tests driving the app through key presses.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe::{GameStatus, Mark, Player, Position};
use tictactoe_tui::{App, Flow, TuiConfig, draw};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        assert_eq!(app.handle_key(KeyCode::Char(c)), Flow::Continue);
    }
}

fn render(app: &App, config: &TuiConfig) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| draw(f, app, config)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_digit_keys_play_cells() {
    let mut app = App::new();
    press(&mut app, "5");
    assert_eq!(app.session().board().get(Position::Center), Mark::Cross);
    assert_eq!(app.session().turn(), Player::Circle);
    assert_eq!(app.status_message(), "Player O's turn");
}

#[test]
fn test_arrow_and_enter_play_cursor_cell() {
    let mut app = App::new();
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    assert_eq!(app.cursor(), Position::TopLeft);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.session().board().get(Position::TopLeft), Mark::Cross);
}

#[test]
fn test_occupied_cell_is_reported_not_played() {
    let mut app = App::new();
    press(&mut app, "55");
    assert_eq!(app.session().history().len(), 1);
    assert!(app.status_message().contains("Center is taken"));

    press(&mut app, "1");
    assert_eq!(app.status_message(), "Player X's turn");
}

#[test]
fn test_win_then_replay() {
    let mut app = App::new();
    // X: 1, 2, 3  O: 4, 5
    press(&mut app, "14253");
    assert_eq!(app.session().status(), GameStatus::CrossWin);
    assert!(app.view().replay_visible);

    press(&mut app, "9");
    assert!(app.status_message().contains("Press 'r'"));
    assert_eq!(app.session().board().get(Position::BottomRight), Mark::Empty);

    press(&mut app, "r");
    assert_eq!(app.session().status(), GameStatus::Playing);
    assert_eq!(app.session().turn(), Player::Cross);
    assert!(app.session().history().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut app = App::new();
    assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    assert_eq!(app.handle_key(KeyCode::Tab), Flow::Continue);
}

#[test]
fn test_render_shows_marks_and_status() {
    let mut app = App::new();
    press(&mut app, "14253");
    let screen = render(&app, &TuiConfig::default());
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player X wins!"));
    assert!(screen.contains("r: replay"));
}

#[test]
fn test_render_uses_configured_symbols() {
    let config = TuiConfig::from_toml("cross_symbol = \"#\"\nshow_cell_numbers = false").unwrap();
    let mut app = App::new();
    press(&mut app, "5");
    let screen = render(&app, &config);
    assert!(screen.contains('#'));
    assert!(!screen.contains('7'));
}
