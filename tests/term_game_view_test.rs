use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{Anchor, GameView, Ink, Viewport};

fn snap_with(board: [[u8; 4]; 4], score: u32, game_over: bool) -> GameSnapshot {
    GameSnapshot {
        board,
        score,
        game_over,
        ..GameSnapshot::default()
    }
}

fn row(fb: &tui_2048::term::FrameBuffer, y: u16) -> Vec<char> {
    fb.row_text(y).chars().collect()
}

fn slice(chars: &[char], from: usize, len: usize) -> String {
    chars[from..from + len].iter().collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor(Anchor::TopLeft);
    let fb = view.render(&snap, Viewport::new(40, 20));

    // 4 cells of 8 columns plus a closing border => 33 wide, 17 tall.
    assert_eq!(fb.get(1, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(33, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(1, 17).unwrap().ch, '└');
    assert_eq!(fb.get(33, 17).unwrap().ch, '┘');
    assert_eq!(fb.get(9, 5).unwrap().ch, '┼');
}

#[test]
fn term_view_renders_header_hints() {
    let snap = GameSnapshot::default();
    let view = GameView::default().with_anchor(Anchor::TopLeft);
    let fb = view.render(&snap, Viewport::new(40, 20));

    let header = row(&fb, 0);
    assert_eq!(slice(&header, 1, 11), "r - Restart");
    assert_eq!(slice(&header, 26, 8), "q - Quit");
    assert_eq!(fb.get(1, 0).unwrap().style.ink, Ink::Muted);
}

#[test]
fn term_view_renders_score_line() {
    let snap = snap_with([[0; 4]; 4], 1234, false);
    let view = GameView::default().with_anchor(Anchor::TopLeft);
    let fb = view.render(&snap, Viewport::new(40, 20));

    let status = row(&fb, 18);
    assert_eq!(slice(&status, 1, 6), "Score:");
    assert_eq!(slice(&status, 9, 4), "1234");
    assert!(!fb.row_text(18).contains("Game Over"));
}

#[test]
fn term_view_renders_game_over_right_aligned() {
    let snap = snap_with([[1; 4]; 4], 0, true);
    let view = GameView::default().with_anchor(Anchor::TopLeft);
    let fb = view.render(&snap, Viewport::new(40, 20));

    let status = row(&fb, 18);
    assert_eq!(slice(&status, 25, 9), "Game Over");
    assert!(fb.get(25, 18).unwrap().style.bold);
}

#[test]
fn term_view_colors_tiles_by_exponent() {
    let mut board = [[0u8; 4]; 4];
    board[0][0] = 1; // 2
    board[0][1] = 3; // 8
    board[0][2] = 7; // 128
    let view = GameView::default().with_anchor(Anchor::TopLeft);
    let fb = view.render(&snap_with(board, 0, false), Viewport::new(40, 20));

    let tile_row = row(&fb, 3);
    assert_eq!(tile_row[5], '2');
    assert_eq!(tile_row[13], '8');
    assert_eq!(slice(&tile_row, 20, 3), "128");

    assert_eq!(fb.get(5, 3).unwrap().style.ink, Ink::Default);
    assert_eq!(fb.get(13, 3).unwrap().style.ink, Ink::Red);
    assert_eq!(fb.get(20, 3).unwrap().style.ink, Ink::Yellow);
}

#[test]
fn term_view_centers_in_large_viewport() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    assert_eq!(view.origin(vp), (23, 3));

    let fb = view.render(&GameSnapshot::default(), vp);
    assert_eq!(fb.get(23, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(55, 19).unwrap().ch, '┘');
}

#[test]
fn term_view_clips_in_tiny_viewport() {
    let view = GameView::default();
    let fb = view.render(&GameState::new(3).snapshot(), Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
