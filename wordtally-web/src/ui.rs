//! Terminal UI rendering for Word Tally Web
//!
//! This module mirrors wordtally-cli's UI but uses ratzilla's rendering.

use ratzilla::ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph},
    Frame,
};

use wordtally_core::{App, Mode, Theme};

/// Colors derived from the current theme
struct Colors {
    bg: Color,
    bar: Color,
    text: Color,
    muted: Color,
    accent: Color,
    grid: Color,
    words: Color,
    characters: Color,
}

fn colors(theme: Theme) -> Colors {
    let palette = theme.palette();
    let rgb = |(r, g, b): (u8, u8, u8)| Color::Rgb(r, g, b);
    match theme {
        Theme::Light => Colors {
            bg: Color::Rgb(250, 250, 250),
            bar: Color::Rgb(230, 230, 235),
            text: Color::Rgb(40, 40, 40),
            muted: rgb(palette.text),
            accent: Color::Rgb(106, 17, 203),
            grid: rgb(palette.grid),
            words: rgb(palette.words),
            characters: rgb(palette.characters),
        },
        Theme::Dark => Colors {
            bg: Color::Rgb(30, 30, 46),
            bar: Color::Rgb(49, 50, 68),
            text: Color::Rgb(205, 214, 244),
            muted: rgb(palette.text),
            accent: Color::Rgb(203, 166, 247),
            grid: rgb(palette.grid),
            words: rgb(palette.words),
            characters: rgb(palette.characters),
        },
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let c = colors(app.theme);
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, &c, chunks[0]);
    draw_main_area(frame, app, &c, chunks[1]);
    draw_status_bar(frame, app, &c, chunks[2]);

    if app.mode == Mode::Help {
        draw_help(frame, &c);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let title_text = format!(" Word Tally (Web) [{}] - {}", app.theme, app.metrics.summary());

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(c.text).bg(c.bar));
    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Editor
            Constraint::Length(36), // Stats + chart
        ])
        .split(area);

    draw_editor(frame, app, c, chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(chunks[1]);

    draw_stats(frame, app, c, side[0]);
    draw_chart(frame, app, c, side[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent))
        .title("Text");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The DOM has no terminal cursor, so the cursor cell is drawn reversed
    let (row, col) = app.buffer.cursor_row_col();
    let text_style = Style::default().fg(c.text);
    let cursor_style = text_style.add_modifier(Modifier::REVERSED);
    let show_cursor = app.mode == Mode::Editing;

    let lines: Vec<Line> = app
        .content_lines()
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if !show_cursor || i != row {
                return Line::from(Span::styled(line.to_string(), text_style));
            }
            let before: String = line.chars().take(col).collect();
            let under = line.chars().nth(col).map(String::from).unwrap_or_else(|| " ".to_string());
            let after: String = line.chars().skip(col + 1).collect();
            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled(under, cursor_style),
                Span::styled(after, text_style),
            ])
        })
        .collect();

    let visible_height = inner.height as usize;
    let scroll_offset = if row >= visible_height {
        row - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn draw_stats(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.muted))
        .title("Statistics");

    let m = &app.metrics;
    let row = |label: &str, value: usize| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(c.muted)),
            Span::styled(value.to_string(), Style::default().fg(c.text).add_modifier(Modifier::BOLD)),
        ])
    };

    let stats = vec![
        row("Words", m.words),
        row("Characters", m.characters),
        row("Sentences", m.sentences),
        row("Paragraphs", m.paragraphs),
        row("Reading (min)", m.reading_time_minutes),
    ];

    frame.render_widget(Paragraph::new(stats).block(block), area);
}

fn draw_chart(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let words = app.history.word_series();
    let characters = app.history.character_series();

    let datasets = vec![
        Dataset::default()
            .name("Words")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(c.words))
            .data(&words),
        Dataset::default()
            .name("Characters")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(c.characters))
            .data(&characters),
    ];

    let x_labels: Vec<String> = match (app.history.iter().next(), app.history.iter().last()) {
        (Some(first), Some(last)) => vec![first.label.clone(), last.label.clone()],
        _ => vec![],
    };
    let x_max = (app.history.len().max(2) - 1) as f64;
    let y_max = app.history.max_value().max(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.muted))
                .title("History"),
        )
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(c.grid))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .style(Style::default().fg(c.grid))
                .bounds([0.0, y_max])
                .labels(vec!["0".to_string(), (y_max as usize).to_string()]),
        );

    frame.render_widget(chart, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let help_hint = "^L clean | ^D download | ^Del clear | F2 theme | F1 help";
    let status = app.status_message.as_deref().unwrap_or(help_hint);

    let status_bar =
        Paragraph::new(format!(" {}", status)).style(Style::default().fg(c.muted).bg(c.bar));

    frame.render_widget(status_bar, area);
}

fn draw_help(frame: &mut Frame, c: &Colors) {
    let area = centered_rect(52, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent))
        .title("Help (press any key to close)");

    let heading = Style::default().fg(c.accent).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled("Editing", heading)),
        Line::from("  Type        Edit the text, counts update live"),
        Line::from("  Arrows      Move the cursor"),
        Line::from("  Home/End    Start/end of line"),
        Line::from(""),
        Line::from(Span::styled("Commands", heading)),
        Line::from("  Ctrl+L      Clean extra whitespace"),
        Line::from("  Ctrl+D      Download as text_<date>.txt"),
        Line::from("  Ctrl+Del    Clear text and history"),
        Line::from("  F2          Toggle light/dark theme"),
    ];

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(c.text).bg(c.bg))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
