use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tempfile::TempDir;

use super::{handle_event, tick};
use crate::app::state::App;
use crate::board::{Board, Post};
use crate::config::Config;
use crate::events::AppEvent;
use crate::interaction::Interaction;
use crate::store;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn app_with(posts: Vec<Post>) -> (TempDir, App) {
    let dir = TempDir::new().expect("temp dir");
    let data_path = dir.path().join("data").join("kudoboard.json");
    let mut app = App::new(&Config::default(), Board::new(posts), data_path, Instant::now());
    app.set_screen(Rect::new(0, 0, 80, 24));
    (dir, app)
}

fn key(app: &mut App, code: KeyCode, now: Instant) {
    handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)), now);
}

fn key_kind(app: &mut App, code: KeyCode, kind: KeyEventKind, now: Instant) {
    let event = KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind);
    handle_event(app, AppEvent::Key(event), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch), now);
    }
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16, now: Instant) {
    let event = MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    handle_event(app, AppEvent::Mouse(event), now);
}

fn click(app: &mut App, column: u16, row: u16, now: Instant) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row, now);
    mouse(app, MouseEventKind::Up(MouseButton::Left), column, row, now);
}

fn saved(app: &App) -> Vec<Post> {
    store::load(&app.data_path).expect("load saved board")
}

fn entry_text(app: &App) -> String {
    app.interaction
        .entry()
        .map(|entry| entry.text().to_string())
        .unwrap_or_default()
}

#[test]
fn creating_and_committing_appends_default_post_and_saves() {
    let (_dir, mut app) = app_with(Vec::new());
    let now = Instant::now();

    key(&mut app, KeyCode::Char('c'), now);
    assert!(matches!(app.interaction, Interaction::Creating(_)));
    type_text(&mut app, "Great job!", now);
    key(&mut app, KeyCode::Enter, now);

    assert!(app.interaction.is_idle());
    let post = app.board.posts().next().expect("created post");
    assert_eq!(post.content, "Great job!");
    assert_eq!((post.x, post.y, post.width, post.height), (100, 100, 200, 100));
    assert_eq!(saved(&app), vec![post.clone()]);
}

#[test]
fn uppercase_c_also_creates() {
    let (_dir, mut app) = app_with(Vec::new());
    let event = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
    handle_event(&mut app, AppEvent::Key(event), Instant::now());
    assert!(matches!(app.interaction, Interaction::Creating(_)));
}

#[test]
fn new_post_is_placed_relative_to_scroll() {
    let (_dir, mut app) = app_with(Vec::new());
    let now = Instant::now();

    key(&mut app, KeyCode::Down, now);
    key(&mut app, KeyCode::Down, now);
    assert_eq!(app.scroll, 40);
    key(&mut app, KeyCode::Char('c'), now);
    type_text(&mut app, "x", now);
    key(&mut app, KeyCode::Enter, now);

    let post = app.board.posts().next().expect("post");
    assert_eq!(post.y, 140);
}

#[test]
fn scrolling_never_goes_above_top() {
    let (_dir, mut app) = app_with(Vec::new());
    let now = Instant::now();

    key(&mut app, KeyCode::Down, now);
    key(&mut app, KeyCode::Up, now);
    key(&mut app, KeyCode::Up, now);
    assert_eq!(app.scroll, 0);

    mouse(&mut app, MouseEventKind::ScrollDown, 5, 5, now);
    assert_eq!(app.scroll, 20);
    mouse(&mut app, MouseEventKind::ScrollUp, 5, 5, now);
    mouse(&mut app, MouseEventKind::ScrollUp, 5, 5, now);
    assert_eq!(app.scroll, 0);
}

#[test]
fn escape_discards_new_post_without_saving() {
    let (_dir, mut app) = app_with(Vec::new());
    let now = Instant::now();

    key(&mut app, KeyCode::Char('c'), now);
    type_text(&mut app, "draft", now);
    key(&mut app, KeyCode::Esc, now);

    assert!(app.interaction.is_idle());
    assert!(app.board.is_empty());
    assert!(!app.data_path.exists());
    assert!(!app.should_quit);
}

#[test]
fn escape_when_idle_quits() {
    let (_dir, mut app) = app_with(Vec::new());
    key(&mut app, KeyCode::Esc, Instant::now());
    assert!(app.should_quit);
}

#[test]
fn escape_returns_every_modal_state_to_idle() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    let now = Instant::now();

    // Dragging
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 12, 6, now);
    assert!(matches!(app.interaction, Interaction::Dragging { .. }));
    key(&mut app, KeyCode::Esc, now);
    assert!(app.interaction.is_idle());

    // Resizing
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 29, 9, now + ms(1000));
    assert!(matches!(app.interaction, Interaction::Resizing { .. }));
    key(&mut app, KeyCode::Esc, now + ms(1000));
    assert!(app.interaction.is_idle());

    // Confirming delete
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 12, 6, now + ms(2000));
    assert!(matches!(app.interaction, Interaction::ConfirmingDelete { .. }));
    key(&mut app, KeyCode::Esc, now + ms(2000));
    assert!(app.interaction.is_idle());

    // Editing
    click(&mut app, 12, 6, now + ms(3000));
    click(&mut app, 12, 6, now + ms(3100));
    assert!(matches!(app.interaction, Interaction::Editing { .. }));
    key(&mut app, KeyCode::Esc, now + ms(3100));
    assert!(app.interaction.is_idle());

    assert!(!app.should_quit);
    assert_eq!(app.board.len(), 1);
}

#[test]
fn double_click_opens_editor_with_cursor_at_end() {
    let (_dir, mut app) = app_with(vec![Post::new("hello", 100, 100)]);
    let now = Instant::now();

    click(&mut app, 12, 6, now);
    assert!(app.interaction.is_idle());
    click(&mut app, 15, 7, now + ms(200));

    let Interaction::Editing { post, entry } = &app.interaction else {
        panic!("expected editing, got {:?}", app.interaction);
    };
    assert_eq!(Some(*post), app.board.id_at(0));
    assert_eq!(entry.text(), "hello");
    assert_eq!(entry.cursor(), 5);
}

#[test]
fn slow_second_click_starts_a_drag_instead() {
    let (_dir, mut app) = app_with(vec![Post::new("hello", 100, 100)]);
    let now = Instant::now();

    click(&mut app, 12, 6, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 12, 6, now + ms(300));

    assert!(matches!(app.interaction, Interaction::Dragging { .. }));
}

#[test]
fn quick_clicks_on_different_posts_do_not_edit() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0), Post::new("b", 300, 0)]);
    let now = Instant::now();

    click(&mut app, 2, 2, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 32, 2, now + ms(100));

    assert!(matches!(app.interaction, Interaction::Dragging { .. }));
}

#[test]
fn editing_commit_replaces_content_and_saves() {
    let (_dir, mut app) = app_with(vec![Post::new("old", 100, 100)]);
    let now = Instant::now();

    click(&mut app, 12, 6, now);
    click(&mut app, 12, 6, now + ms(100));
    key(&mut app, KeyCode::Backspace, now + ms(150));
    key(&mut app, KeyCode::Left, now + ms(150));
    type_text(&mut app, "X", now + ms(150));
    assert_eq!(entry_text(&app), "oXl");
    key(&mut app, KeyCode::Enter, now + ms(200));

    assert!(app.interaction.is_idle());
    assert_eq!(app.board.posts().next().map(|p| p.content.as_str()), Some("oXl"));
    assert_eq!(saved(&app)[0].content, "oXl");
}

#[test]
fn dragging_keeps_pointer_offset_and_saves_on_release() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 12, 6, now);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 20, 10, now);
    {
        let post = app.board.posts().next().expect("post");
        assert_eq!((post.x, post.y), (180, 180));
    }
    assert!(!app.data_path.exists());

    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 20, 10, now);

    assert!(app.interaction.is_idle());
    let on_disk = saved(&app);
    assert_eq!((on_disk[0].x, on_disk[0].y), (180, 180));
}

#[test]
fn dragging_clamps_to_board_origin() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 12, 6, now);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 0, 0, now);

    let post = app.board.posts().next().expect("post");
    assert_eq!((post.x, post.y), (0, 0));
}

#[test]
fn click_without_motion_does_not_save() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    click(&mut app, 12, 6, Instant::now());
    assert!(app.interaction.is_idle());
    assert!(!app.data_path.exists());
}

#[test]
fn resizing_from_corner_follows_pointer_and_clamps() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 29, 9, now);
    assert!(matches!(app.interaction, Interaction::Resizing { .. }));
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 34, 11, now);
    {
        let post = app.board.posts().next().expect("post");
        assert_eq!((post.x, post.y, post.width, post.height), (100, 100, 250, 140));
    }

    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 0, 0, now);
    {
        let post = app.board.posts().next().expect("post");
        assert_eq!((post.width, post.height), (40, 60));
    }

    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 0, 0, now);
    assert!(app.interaction.is_idle());
    assert_eq!(saved(&app)[0].width, 40);
}

#[test]
fn moved_with_button_held_counts_as_drag() {
    let (_dir, mut app) = app_with(vec![Post::new("note", 100, 100)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 12, 6, now);
    mouse(&mut app, MouseEventKind::Moved, 13, 6, now);

    let post = app.board.posts().next().expect("post");
    assert_eq!(post.x, 110);
}

#[test]
fn confirming_yes_deletes_post_and_shifts_later_ones() {
    let (_dir, mut app) = app_with(vec![
        Post::new("a", 0, 0),
        Post::new("b", 300, 0),
        Post::new("c", 600, 0),
    ]);
    let now = Instant::now();
    let c = app.board.id_at(2).expect("c");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 35, 2, now);
    assert!(matches!(app.interaction, Interaction::ConfirmingDelete { .. }));
    mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 35, 2, now);

    // Yes button sits at columns 22..32, rows 12..15 on an 80x24 screen.
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 25, 13, now);
    tick(&mut app, now);

    assert!(app.interaction.is_idle());
    let contents: Vec<&str> = app.board.posts().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "c"]);
    assert_eq!(app.board.index_of(c), Some(1));
    let on_disk: Vec<String> = saved(&app).into_iter().map(|p| p.content).collect();
    assert_eq!(on_disk, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn click_on_yes_released_before_the_frame_still_deletes() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 2, 2, now);
    tick(&mut app, now);
    click(&mut app, 25, 13, now + ms(5));
    assert_eq!(app.mouse_pressed, None);
    tick(&mut app, now + ms(16));

    assert!(app.interaction.is_idle());
    assert!(app.board.is_empty());
    assert!(saved(&app).is_empty());
}

#[test]
fn click_before_dialog_opened_is_not_an_answer() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    // Empty board cell where the Yes button will appear.
    click(&mut app, 25, 13, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 2, 2, now);
    tick(&mut app, now);

    assert!(matches!(app.interaction, Interaction::ConfirmingDelete { .. }));
    assert_eq!(app.board.len(), 1);
}

#[test]
fn quick_click_on_no_keeps_post() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    click(&mut app, 50, 13, now);
    tick(&mut app, now);

    assert!(app.interaction.is_idle());
    assert_eq!(app.board.len(), 1);
}

#[test]
fn confirming_no_keeps_post() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 13, now);
    tick(&mut app, now);

    assert!(app.interaction.is_idle());
    assert_eq!(app.board.len(), 1);
    assert!(!app.data_path.exists());
}

#[test]
fn confirm_buttons_need_the_left_button_down() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Moved, 25, 13, now);
    tick(&mut app, now);

    assert!(matches!(app.interaction, Interaction::ConfirmingDelete { .. }));
}

#[test]
fn confirm_dialog_accepts_keyboard() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0), Post::new("b", 300, 0)]);
    let now = Instant::now();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    key(&mut app, KeyCode::Char('n'), now);
    assert!(app.interaction.is_idle());
    assert_eq!(app.board.len(), 2);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    key(&mut app, KeyCode::Char('y'), now);
    assert_eq!(app.board.len(), 1);
    assert_eq!(saved(&app)[0].content, "b");
}

#[test]
fn right_click_while_confirming_is_ignored() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0), Post::new("b", 300, 0)]);
    let now = Instant::now();
    let a = app.board.id_at(0).expect("a");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 2, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 32, 2, now);

    assert_eq!(app.interaction, Interaction::ConfirmingDelete { post: a });
}

#[test]
fn backspace_held_repeats_after_delay_then_at_interval() {
    let (_dir, mut app) = app_with(Vec::new());
    app.synthetic_repeat = true;
    let start = Instant::now();

    key(&mut app, KeyCode::Char('c'), start);
    type_text(&mut app, "abcdefghijklmnopqrstuvwxyz", start);
    key_kind(&mut app, KeyCode::Backspace, KeyEventKind::Press, start);
    assert_eq!(entry_text(&app).len(), 25);

    tick(&mut app, start + ms(490));
    assert_eq!(entry_text(&app).len(), 25);

    for step in 50..=100 {
        tick(&mut app, start + ms(step * 10));
    }
    // One press plus repeats at 0.50, 0.55, ..., 1.00 seconds.
    assert_eq!(entry_text(&app).len(), 26 - 12);

    key_kind(&mut app, KeyCode::Backspace, KeyEventKind::Release, start + ms(1000));
    tick(&mut app, start + ms(2000));
    assert_eq!(entry_text(&app).len(), 14);
}

#[test]
fn terminal_repeats_are_ignored_when_repeat_is_synthetic() {
    let (_dir, mut app) = app_with(Vec::new());
    app.synthetic_repeat = true;
    let now = Instant::now();

    key(&mut app, KeyCode::Char('c'), now);
    type_text(&mut app, "abc", now);
    key_kind(&mut app, KeyCode::Backspace, KeyEventKind::Press, now);
    key_kind(&mut app, KeyCode::Backspace, KeyEventKind::Repeat, now + ms(30));

    assert_eq!(entry_text(&app), "ab");
}

#[test]
fn terminal_repeats_delete_when_releases_are_not_reported() {
    let (_dir, mut app) = app_with(Vec::new());
    let now = Instant::now();

    key(&mut app, KeyCode::Char('c'), now);
    type_text(&mut app, "abcd", now);
    key(&mut app, KeyCode::Left, now);
    key(&mut app, KeyCode::Left, now);
    key_kind(&mut app, KeyCode::Delete, KeyEventKind::Press, now);
    key_kind(&mut app, KeyCode::Delete, KeyEventKind::Repeat, now + ms(30));
    tick(&mut app, now + ms(2000));

    assert_eq!(entry_text(&app), "ab");
}

#[test]
fn typing_another_key_stops_backspace_repeat() {
    let (_dir, mut app) = app_with(Vec::new());
    app.synthetic_repeat = true;
    let start = Instant::now();

    key(&mut app, KeyCode::Char('c'), start);
    type_text(&mut app, "abcdef", start);
    key(&mut app, KeyCode::Backspace, start);
    key(&mut app, KeyCode::Char('z'), start + ms(100));
    tick(&mut app, start + ms(1000));

    assert_eq!(entry_text(&app), "abcdez");
}

#[test]
fn interaction_on_a_removed_post_falls_back_to_idle() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    click(&mut app, 2, 2, now);
    click(&mut app, 2, 2, now + ms(100));
    assert!(matches!(app.interaction, Interaction::Editing { .. }));

    app.board.remove_at(0);
    tick(&mut app, now + ms(120));

    assert!(app.interaction.is_idle());
}

#[test]
fn clicks_outside_posts_and_board_do_nothing() {
    let (_dir, mut app) = app_with(vec![Post::new("a", 0, 0)]);
    let now = Instant::now();

    click(&mut app, 70, 20, now);
    assert!(app.interaction.is_idle());
    // Row 23 is the status bar.
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 2, 23, now);
    assert!(app.interaction.is_idle());
}

#[test]
fn save_failure_is_reported_on_status_bar() {
    let (dir, mut app) = app_with(Vec::new());
    // A directory can't be written as a file.
    app.data_path = dir.path().to_path_buf();
    let now = Instant::now();

    key(&mut app, KeyCode::Char('c'), now);
    type_text(&mut app, "x", now);
    key(&mut app, KeyCode::Enter, now);

    assert_eq!(app.board.len(), 1);
    let output = app.output.clone().unwrap_or_default();
    assert!(output.starts_with("Save failed"), "output: {output}");
}

#[test]
fn resize_event_updates_board_area() {
    let (_dir, mut app) = app_with(Vec::new());
    handle_event(&mut app, AppEvent::Resize(100, 40), Instant::now());
    assert_eq!(app.board_area, Rect::new(0, 0, 100, 39));
    assert_eq!(app.viewport_height(), 39 * 20);
}

#[test]
fn posts_at_extreme_coordinates_do_not_break_input() {
    let (dir, _) = app_with(Vec::new());
    let data_path = dir.path().join("far.json");
    std::fs::write(
        &data_path,
        r#"[{"content":"far","y":2147483600},{"content":"up","x":-2147483643,"y":-2147483643}]"#,
    )
    .expect("write board");
    let posts = store::load(&data_path).expect("load far posts");
    let mut app = App::new(&Config::default(), Board::new(posts), data_path, Instant::now());
    app.set_screen(Rect::new(0, 0, 80, 24));
    let now = Instant::now();

    key(&mut app, KeyCode::Down, now);
    assert_eq!(app.scroll, 20);
    click(&mut app, 1, 1, now);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 1, 1, now);
    tick(&mut app, now);

    assert!(app.interaction.is_idle());
    assert_eq!(app.board.len(), 2);
}
