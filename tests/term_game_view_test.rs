use tui_2048::core::{Board, Game, GameSnapshot};
use tui_2048::term::{tile_color, GameView, Viewport};
use tui_2048::types::GameStatus;

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Game::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles * 7 columns + gap + border = 31 wide, 4 * 4 + 3 = 19 tall.
    let fb = view.render(&snap, Viewport::new(31, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(30, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_tile_value() {
    let mut snap: GameSnapshot = GameSnapshot::default();
    snap.board[0][0] = 2048;

    let fb = GameView::default().render(&snap, Viewport::new(31, 19));

    // First tile occupies x 2..8, y 2..5; the text row is y = 3.
    let row: Vec<char> = fb.row_text(3).chars().collect();
    let text: String = row[2..8].iter().collect();
    assert_eq!(text, " 2048 ");
    assert_eq!(fb.get(2, 2).unwrap().style.bg, tile_color(2048));
    assert_eq!(fb.get(9, 2).unwrap().style.bg, tile_color(0));
}

#[test]
fn term_view_draws_overlays() {
    let board = Board::from_rows([
        [2048, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    let snap = Game::from_board(board, 1).unwrap().snapshot();
    assert_eq!(snap.status, GameStatus::WonAndLost);

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(40, 19)));
    assert!(text.contains("YOU WON!"));
    assert!(text.contains("GAME OVER!"));

    let fresh = Game::new(3).snapshot();
    let text = screen_text(&GameView::default().render(&fresh, Viewport::new(40, 19)));
    assert!(!text.contains("YOU WON!"));
    assert!(!text.contains("GAME OVER!"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Game::new(1).snapshot();
    snap.moves = 1234;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 19)));
    assert!(text.contains("MOVES"));
    assert!(text.contains("1234"));
    assert!(text.contains("BEST TILE"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(31, 19)));
    assert!(!narrow.contains("MOVES"));
}
