//! Shared layout pieces for the runner screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create the game layout with an outer border.
///
/// The play field takes whatever width the info panel leaves over.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area to use
/// * `title` - Title for the outer border (e.g., " Lane Runner ")
/// * `border_color` - Color for the outer border
/// * `content_min_height` - Minimum height for the play field
/// * `info_panel_width` - Width of the info panel
///
/// # Returns
/// A `GameLayout` with the play field, status bar and info panel areas.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    // Outer border around the whole screen
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play field and status bar (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a 2-line status bar: message on top, key hints below.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The status bar area from `GameLayout`
/// * `status_text` - Message for the top line (HUD message or prompt)
/// * `status_color` - Color of the message
/// * `controls` - (key, action) pairs, e.g. `[("[Space]", "Jump")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a compact game-over banner at the bottom of an area.
///
/// Does NOT clear the area, so the frozen final frame stays visible above it.
pub fn render_game_over_banner(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render the info panel frame with the standard " Info " title.
///
/// # Returns
/// The inner Rect for the score, speed and legend lines.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
