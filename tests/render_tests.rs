use solo_battleship::render::{
    banner, render_banner_page, render_board_page, render_html, render_json, render_text,
};
use solo_battleship::{apply_move, Assets, Board, Move, OccupancyGrid, View};

fn played_board() -> Board {
    let ships = OccupancyGrid::from_cells([(2, 3)]).unwrap();
    let mut board = Board::default();
    apply_move(&mut board, &ships, Move::new(2, 3)).unwrap();
    apply_move(&mut board, &ships, Move::new(4, 0)).unwrap();
    board
}

#[test]
fn board_page_has_score_and_table() {
    let page = render_board_page("<body>", &played_board().snapshot());
    assert!(page.starts_with("<body>"));
    assert!(page.contains("<h1>Score: 1 | Turns: 29 </h1>"));
    assert!(page.contains("<tr><td></td><td>0</td><td>1</td>"));
    assert!(page.contains("<tr><td>2</td><td>?</td><td>?</td><td>?</td><td>X</td>"));
    assert!(page.contains("<tr><td>4</td><td>&nbsp;</td>"));
    assert_eq!(page.matches("<td>?</td>").count(), 98);
    assert!(page.ends_with("</table></body></html>"));
}

#[test]
fn terminal_views_render_refresh_banners() {
    for (view, title) in [
        (View::Restarting, "Restarting game..."),
        (View::GameOver, "Game Over"),
        (View::YouWin, "You Win"),
    ] {
        assert_eq!(banner(&view), Some(title));
        let page = render_html(&view, &Assets::new(None, None)).unwrap();
        assert!(page.contains("<meta http-equiv=\"refresh\" content=\"3; url=/\">"));
        assert!(page.contains(&format!("<h1>{}</h1>", title)));
    }
}

#[test]
fn banner_text_is_escaped() {
    assert!(render_banner_page("<b>").contains("<h1>&lt;b&gt;</h1>"));
}

#[test]
fn board_needs_index_asset() {
    let view = View::Board(Board::default().snapshot());
    assert!(render_html(&view, &Assets::new(None, None)).is_none());
    let page = render_html(&view, &Assets::embedded()).unwrap();
    assert!(page.contains("<form method=\"post\" action=\"/\">"));
}

#[test]
fn json_tags_the_view() {
    assert_eq!(render_json(&View::GameOver).unwrap(), r#"{"view":"game_over"}"#);
    let json = render_json(&View::Board(played_board().snapshot())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["view"], "board");
    assert_eq!(value["board"]["score"], 1);
    assert_eq!(value["board"]["turns_left"], 29);
    assert_eq!(value["board"]["cells"][2][3], "Hit");
    assert_eq!(value["board"]["cells"][4][0], "Miss");
}

#[test]
fn text_view_marks_hits_and_misses() {
    let text = render_text(&View::Board(played_board().snapshot()));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Score: 1 | Turns: 29");
    assert_eq!(lines[1], "   0 1 2 3 4 5 6 7 8 9");
    assert_eq!(lines[4], "2  ? ? ? X ? ? ? ? ? ?");
    assert_eq!(lines[6], "4  . ? ? ? ? ? ? ? ? ?");
    assert_eq!(render_text(&View::YouWin), "You Win");
}
