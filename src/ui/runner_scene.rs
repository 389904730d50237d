//! Lane Runner scene rendering.
//!
//! Uses a cell buffer for per-character color control. Lanes, entities and
//! the runner are drawn into a 2D grid which is then stamped row-by-row as
//! Paragraph widgets. The track is seen from above: entities enter at the
//! top and scroll down toward the runner.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::tick_events::{Hud, MessageTone};
use lane_runner::runner::{
    RunnerSnapshot, Variant, COIN_DEPTH, FIELD_DEPTH, LANE_COUNT, OBSTACLE_DEPTH, PLAYER_DEPTH,
    PLAYER_ROW, TICK_SECONDS,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns per lane, excluding dividers.
const LANE_COLS: u16 = 9;

/// Full field width: lanes plus a divider on each side of every lane.
const FIELD_COLS: u16 = LANE_COUNT as u16 * (LANE_COLS + 1) + 1;

const FIELD_ROWS: u16 = FIELD_DEPTH as u16;

/// Render the whole runner screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, snap: &RunnerSnapshot, hud: &Hud) {
    let title = match snap.variant {
        Variant::Classic => " Lane Runner ",
        Variant::Coins => " Lane Runner: Coins ",
    };
    let layout = create_game_layout(frame, area, title, Color::LightYellow, 12, 22);

    render_play_field(frame, layout.content, snap);

    if snap.is_game_over() {
        let message = if snap.score > 0 && snap.score == snap.high_score {
            format!("Score {} (best!)", snap.score)
        } else {
            format!("Score {}  Best {}", snap.score, snap.high_score)
        };
        render_game_over_banner(frame, layout.content, "GAME OVER", &message);
    }

    render_status_bar_content(frame, layout.status_bar, snap, hud);
    render_info_panel(frame, layout.info_panel, snap);
}

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// First column inside `lane`.
fn lane_start(lane: usize) -> usize {
    1 + lane * (LANE_COLS as usize + 1)
}

/// Rows covered by a span `[y, y + depth)` of track, scaled to the buffer.
fn row_span(y: f64, depth: f64, y_scale: f64) -> (i32, i32) {
    let top = (y * y_scale).floor() as i32;
    let bottom = (((y + depth) * y_scale).ceil() as i32 - 1).max(top);
    (top, bottom)
}

fn render_play_field(frame: &mut Frame, area: Rect, snap: &RunnerSnapshot) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let render_height = area.height.min(FIELD_ROWS);
    let render_width = area.width.min(FIELD_COLS);
    let rows = render_height as usize;
    let cols = render_width as usize;

    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); cols]; rows];
    let y_scale = render_height as f64 / FIELD_DEPTH;

    let put = |buffer: &mut Vec<Vec<Cell>>, row: i32, col: usize, ch: char, fg: Color| {
        if row >= 0 && (row as usize) < rows && col < cols {
            buffer[row as usize][col] = Cell { ch, fg };
        }
    };

    // ── Lane dividers, dashed and scrolling with the track ─────────────
    let scroll = (snap.frame_count as f64 * snap.speed * y_scale) as i64;
    for lane in 0..=LANE_COUNT {
        let col = lane * (LANE_COLS as usize + 1);
        let outer = lane == 0 || lane == LANE_COUNT;
        for row in 0..rows {
            if outer {
                put(&mut buffer, row as i32, col, '│', Color::DarkGray);
            } else if (row as i64 - scroll).rem_euclid(3) != 0 {
                put(&mut buffer, row as i32, col, '┆', Color::Rgb(70, 70, 70));
            }
        }
    }

    // ── Coins ─────────────────────────────────────────────────────────
    for coin in &snap.coins {
        let (top, bottom) = row_span(coin.y, COIN_DEPTH, y_scale);
        let center = lane_start(coin.lane) + LANE_COLS as usize / 2;
        for row in top..=bottom {
            put(&mut buffer, row, center, '●', Color::Yellow);
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &snap.obstacles {
        let (top, bottom) = row_span(obstacle.y, OBSTACLE_DEPTH, y_scale);
        let start = lane_start(obstacle.lane);
        for row in top..=bottom {
            for col in start + 1..start + LANE_COLS as usize - 1 {
                put(&mut buffer, row, col, '▓', Color::Rgb(200, 70, 60));
            }
        }
    }

    // ── Runner ────────────────────────────────────────────────────────
    let player = &snap.player;
    let (ground_row, _) = row_span(PLAYER_ROW, PLAYER_DEPTH, y_scale);
    let center = lane_start(player.lane) + LANE_COLS as usize / 2;

    if player.is_jumping {
        // Shadow stays on the ground, body rises with elevation
        for dx in 0..3 {
            put(&mut buffer, ground_row, center - 1 + dx, '░', Color::DarkGray);
        }
    }

    let lift = (player.elevation * y_scale).round() as i32;
    let body_row = ground_row - lift;
    let (glyphs, color) = if !player.alive {
        (['╳', '╳', '╳'], Color::Red)
    } else if player.is_jumping {
        (['╱', '▲', '╲'], Color::LightCyan)
    } else {
        (['╱', '▲', '╲'], Color::LightYellow)
    };
    for (dx, ch) in glyphs.into_iter().enumerate() {
        put(&mut buffer, body_row, center - 1 + dx, ch, color);
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    let x_offset = area.x + area.width.saturating_sub(render_width) / 2;

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        let row_area = Rect::new(x_offset, area.y + row_idx as u16, render_width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &RunnerSnapshot, hud: &Hud) {
    if snap.is_game_over() {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R]", "Restart"), ("[M]", "Music"), ("[Q]", "Quit")],
        );
        return;
    }

    let (text, color) = match hud.latest() {
        Some(message) => (
            message.text.as_str(),
            match message.tone {
                MessageTone::Good => Color::Green,
                MessageTone::Bad => Color::Red,
                MessageTone::Info => Color::Cyan,
            },
        ),
        None => ("Run!", Color::LightYellow),
    };

    render_status_bar(
        frame,
        area,
        text,
        color,
        &[
            ("[←/→]", "Lane"),
            ("[Space]", "Jump"),
            ("[M]", "Music"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &RunnerSnapshot) {
    let inner = render_info_panel_frame(frame, area);

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let seconds = snap.frame_count as f64 * TICK_SECONDS;
    let music = if snap.music_on { "♪ On" } else { "Off" };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Mode:  "),
            Span::styled(snap.variant.name(), Style::default().fg(Color::LightYellow)),
        ]),
        Line::from(vec![
            label("Score: "),
            Span::styled(
                snap.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Best:  "),
            Span::styled(snap.high_score.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Speed: "),
            Span::styled(
                format!("{:.2}", snap.speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("Time:  "),
            Span::styled(format!("{:.1}s", seconds), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Music: "),
            Span::styled(music, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ▲ ", Style::default().fg(Color::LightYellow)),
            label("Runner"),
        ]),
        Line::from(vec![
            Span::styled(" ▓ ", Style::default().fg(Color::Rgb(200, 70, 60))),
            label("Obstacle"),
        ]),
    ];

    if snap.variant == Variant::Coins {
        lines.push(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Yellow)),
            label("Coin"),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
