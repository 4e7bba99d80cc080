use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use listjoin_app::{AppState, Focus, StatusKind};
use listjoin_config::constants::MIN_GUTTER_WIDTH;
use listjoin_theme::Theme;
use listjoin_transform::DelimiterMode;

const HELP_TEXT: &str =
    " ^C Copy  ^V Paste  ^R Reverse  ^L Clear  Alt+1-7/^D Delimiter  Tab Focus  ^Q Quit";

/// Render the whole screen
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let size = frame.area();

    let background = Block::default().style(Style::default().bg(state.theme.bg));
    frame.render_widget(background, size);

    // Selector bar (3 lines), panels, status bar (1 line)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_selector(frame, rows[0], state);
    render_input(frame, panels[0], state);
    render_output(frame, panels[1], state);
    render_status_bar(frame.buffer_mut(), rows[2], state);
}

fn panel_block<'a>(title: Vec<Span<'a>>, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.accented_fg
    } else {
        theme.disabled
    };
    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg).fg(theme.fg))
}

/// Delimiter choices plus the custom delimiter field
fn render_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let block = panel_block(
        vec![Span::raw(" Delimiter ")],
        state.focus == Focus::Custom,
        theme,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (index, mode) in DelimiterMode::ALL.iter().enumerate() {
        let label = format!(" {} {} ", index + 1, mode.label());
        let style = if *mode == state.mode {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let used: u16 = spans.iter().map(|s| s.width() as u16).sum();
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if state.mode != DelimiterMode::Custom {
        return;
    }

    // Custom field after the choices
    let label = "Custom: ";
    let field_x = inner.x + used;
    let field_width = inner.right().saturating_sub(field_x + label.len() as u16);
    if field_width == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    buf.set_string(field_x, inner.y, label, Style::default().fg(theme.warning));
    let text_x = field_x + label.len() as u16;
    let text = state.custom_field.text();
    let skip = text
        .chars()
        .count()
        .saturating_sub(field_width.saturating_sub(1) as usize);
    if text.is_empty() && state.focus != Focus::Custom {
        buf.set_string(
            text_x,
            inner.y,
            "(space)",
            Style::default().fg(theme.disabled),
        );
    } else {
        let visible: String = text.chars().skip(skip).collect();
        buf.set_stringn(
            text_x,
            inner.y,
            &visible,
            field_width as usize,
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::UNDERLINED),
        );
    }

    if state.focus == Focus::Custom {
        let before: String = text
            .chars()
            .take(state.custom_field.cursor())
            .skip(skip)
            .collect();
        let offset = display_width(&before).min(field_width.saturating_sub(1) as usize);
        frame.set_cursor_position((text_x + offset as u16, inner.y));
    }
}

/// Display width of text as rendered in the input panel
fn display_width(text: &str) -> usize {
    text.chars().map(|ch| display_char(ch).width().unwrap_or(0)).sum()
}

/// Tabs and carriage returns take one cell each
fn display_char(ch: char) -> char {
    match ch {
        '\t' | '\r' => ' ',
        _ => ch,
    }
}

/// Raw input with the line-number gutter
fn render_input(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.theme;
    let block = panel_block(
        vec![
            Span::raw(" Input "),
            Span::styled(
                format!("[{}] ", state.metadata.badge()),
                Style::default().fg(theme.accented_fg),
            ),
        ],
        state.focus == Focus::Input,
        theme,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let digits = state.metadata.count.to_string().len() as u16;
    let gutter = (digits + 2).max(MIN_GUTTER_WIDTH).min(inner.width);
    let text_x = inner.x + gutter;
    let text_width = inner.width - gutter;

    let cursor = state.input.cursor_position();
    state
        .input_view
        .follow(cursor, inner.height as usize, text_width as usize);
    let view = state.input_view;

    let buf = frame.buffer_mut();
    for row in 0..inner.height {
        let line_index = view.top + row as usize;
        let Some(label) = state.metadata.labels.get(line_index) else {
            break;
        };
        let y = inner.y + row;
        buf.set_string(
            inner.x,
            y,
            format!("{:>width$} ", label, width = (gutter - 1) as usize),
            Style::default().fg(theme.disabled),
        );
        let visible: String = state
            .input
            .line(line_index)
            .chars()
            .skip(view.left)
            .map(display_char)
            .collect();
        buf.set_stringn(
            text_x,
            y,
            &visible,
            text_width as usize,
            Style::default().fg(theme.fg),
        );
    }

    if state.focus == Focus::Input && text_width > 0 {
        let (line, column) = cursor;
        let before: String = state
            .input
            .line(line)
            .chars()
            .skip(view.left)
            .take(column.saturating_sub(view.left))
            .collect();
        let x = text_x + (display_width(&before) as u16).min(text_width - 1);
        let y = inner.y + (line - view.top) as u16;
        frame.set_cursor_position((x, y));
    }
}

/// Joined output, read-only
fn render_output(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let block = panel_block(
        vec![
            Span::raw(" Output "),
            Span::styled(
                format!("[{} joined] ", state.item_count),
                Style::default().fg(theme.accented_fg),
            ),
        ],
        false,
        theme,
    );
    let text = state.output.replace('\t', "    ");
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Notification or key help
fn render_status_bar(buf: &mut Buffer, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let theme = state.theme;

    // Fill entire line with background color from theme
    for x in area.left()..area.right() {
        buf[(x, area.top())]
            .set_char(' ')
            .set_style(Style::default().bg(theme.accented_bg));
    }

    let (text, style) = match &state.status {
        Some(status) => {
            let fg = match status.kind {
                StatusKind::Success => theme.success,
                StatusKind::Error => theme.error,
            };
            (
                format!(" {}", status.text),
                Style::default()
                    .bg(theme.accented_bg)
                    .fg(fg)
                    .add_modifier(Modifier::BOLD),
            )
        }
        None => (
            HELP_TEXT.to_string(),
            Style::default().bg(theme.accented_bg).fg(theme.fg),
        ),
    };
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}
