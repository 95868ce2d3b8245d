use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use crave_core::{
    cook::CookSession, video, ChatRole, Difficulty, Recipe, ViewMode, CATEGORIES,
};
use crave_core::state::subheading;
use crate::app::{App, InputMode};

const ACCENT: Color = Color::Rgb(249, 115, 22);
const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;
const MAX_COLUMNS: u16 = 4;
const SKELETON_CARDS: usize = 8;

/// Wrap text to fit within a given width, returning multiple lines
/// Uses word boundaries for wrapping (doesn't break mid-word)
fn wrap_text_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len == 0 {
            current_line = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current_line.push(' ');
            current_line.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
            current_len = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Cut to `max` characters with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Easy => Style::default().fg(Color::Black).bg(Color::Green),
        Difficulty::Medium => Style::default().fg(Color::Black).bg(Color::Yellow),
        Difficulty::Hard => Style::default().fg(Color::White).bg(Color::Red),
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let chips_height = if app.view == ViewMode::Browse { 1 } else { 0 };

    // Main layout: header, search, chips, heading, grid, footer
    let [header_area, search_area, chips_area, heading_area, grid_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(chips_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    render_header(app, frame, header_area);
    render_search(app, frame, search_area);
    if app.view == ViewMode::Browse {
        render_chips(app, frame, chips_area);
    }
    render_heading(app, frame, heading_area);
    render_grid(app, frame, grid_area);
    render_footer(app, frame, footer_area);

    // Overlays, bottom to top
    if let Some(recipe) = app.detail.clone() {
        if let Some(cook) = &app.cook {
            render_cook_mode(app, cook, frame, area);
        } else {
            render_detail(app, &recipe, frame, area);
        }
    }
    if app.chat_open {
        render_chat(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(area);

    let title = Line::from(vec![
        Span::styled(" Crave", Style::default().fg(Color::White).bold()),
        Span::styled(".", Style::default().fg(ACCENT).bold()),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let fav_style = if app.view == ViewMode::Favorites {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let favorites = Line::from(Span::styled(
        format!("♥ Favorites ({}) ", app.favorites.len()),
        fav_style,
    ))
    .alignment(Alignment::Right);

    let bg = Style::default().bg(Color::DarkGray);
    frame.render_widget(Paragraph::new(title).style(bg), left);
    frame.render_widget(Paragraph::new(favorites).style(bg), right);
}

fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing
        && app.detail.is_none()
        && !app.chat_open;
    let border_color = if editing { ACCENT } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");

    let text = if app.search_input.is_empty() && !editing {
        Line::from(Span::styled("Find a recipe...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(app.search_input.as_str())
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if editing {
        let x = inner.x + (app.search_cursor as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_chips(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, category) in CATEGORIES.iter().enumerate() {
        let style = if app.selected_category == Some(i) {
            Style::default().fg(Color::White).bg(Color::Black).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_heading(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", app.heading()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", subheading(app.view)),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_grid(app: &mut App, frame: &mut Frame, area: Rect) {
    let columns = (area.width / CARD_WIDTH).clamp(1, MAX_COLUMNS);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.grid_columns = columns as usize;

    if app.loading && app.view == ViewMode::Browse {
        render_skeletons(frame, area, columns, visible_rows);
        return;
    }

    let count = app.visible_recipes().len();
    if count == 0 {
        render_empty(app, frame, area);
        return;
    }

    // Keep the selected row on screen
    let cols = columns as usize;
    let selected_row = app.grid_selected / cols;
    if selected_row < app.grid_row_offset {
        app.grid_row_offset = selected_row;
    } else if selected_row >= app.grid_row_offset + visible_rows {
        app.grid_row_offset = selected_row + 1 - visible_rows;
    }

    let row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
    let col_constraints = vec![Constraint::Ratio(1, columns as u32); cols];
    let rows = Layout::vertical(row_constraints).split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cells = Layout::horizontal(col_constraints.clone()).split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            let index = (app.grid_row_offset + row_idx) * cols + col_idx;
            let Some(recipe) = app.visible_recipes().get(index) else {
                return;
            };
            let selected = index == app.grid_selected;
            let favorite = app.is_favorite(&recipe.id);
            render_card(recipe, selected, favorite, frame, *cell);
        }
    }
}

fn render_card(recipe: &Recipe, selected: bool, favorite: bool, frame: &mut Frame, area: Rect) {
    let border_style = if selected {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_width = area.width.saturating_sub(4) as usize;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", truncate(&recipe.name, title_width)));

    let mut badges = Vec::new();
    if let Some(category) = &recipe.category {
        badges.push(Span::styled(
            format!(" {} ", category),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        badges.push(Span::raw(" "));
    }
    if favorite {
        badges.push(Span::styled("♥", Style::default().fg(Color::Red)));
    }

    let area_line = match &recipe.area {
        Some(region) => Line::from(Span::styled(
            format!("◆ {}", region),
            Style::default().fg(Color::Gray),
        )),
        None => Line::default(),
    };

    let action_style = if selected {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        Line::from(badges),
        area_line,
        Line::from(Span::styled(" View Recipe → ", action_style)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_skeletons(frame: &mut Frame, area: Rect, columns: u16, visible_rows: usize) {
    let cols = columns as usize;
    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let skeleton = Style::default().fg(Color::DarkGray);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); cols]).split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            if row_idx * cols + col_idx >= SKELETON_CARDS {
                return;
            }
            let width = cell.width.saturating_sub(4) as usize;
            let lines = vec![
                Line::from(Span::styled("░".repeat(width * 3 / 4), skeleton)),
                Line::from(Span::styled("░".repeat(width / 2), skeleton)),
            ];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(skeleton);
            frame.render_widget(Paragraph::new(lines).block(block), *cell);
        }
    }
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("No recipes found", Style::default().bold())),
        Line::from(Span::styled(
            "Try adjusting your search or category filter.",
            Style::default().fg(Color::Gray),
        )),
    ];
    if app.view == ViewMode::Favorites {
        lines[2] = Line::from(Span::styled(
            "Press f on any recipe to save it here.",
            Style::default().fg(Color::Gray),
        ));
    } else if app.selected_category.is_some() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press x to clear filters",
            Style::default().fg(ACCENT),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    if let Some(status) = &app.status {
        let line = Line::from(Span::styled(format!(" {} ", status), Style::default().fg(ACCENT)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let pairs: Vec<(&str, &str)> = if app.chat_open {
        vec![("Enter", "send"), ("Esc", "close chat")]
    } else if app.cook.is_some() {
        let mut pairs = vec![("←/→", "step")];
        pairs.push(("1-9", "timer"));
        pairs.extend([("x", "stop timer"), ("Esc", "exit cook mode")]);
        pairs
    } else if app.detail.is_some() {
        vec![
            ("j/k", "scroll"),
            ("c", "cook mode"),
            ("f", "favorite"),
            ("s", "share"),
            ("a", "chef bot"),
            ("Esc", "close"),
        ]
    } else if app.input_mode == InputMode::Editing {
        vec![("Enter", "search"), ("Esc", "cancel")]
    } else {
        let mut pairs = vec![
            ("hjkl", "move"),
            ("Enter", "open"),
            ("f", "favorite"),
            ("/", "search"),
        ];
        if app.view == ViewMode::Browse {
            pairs.push(("Tab", "category"));
            if app.selected_category.is_some() {
                pairs.push(("x", "clear"));
            }
        }
        pairs.extend([
            ("v", if app.view == ViewMode::Browse { "favorites" } else { "browse" }),
            ("H", "home"),
            ("a", "chef bot"),
            ("q", "quit"),
        ]);
        pairs
    };

    let spans: Vec<Span> = pairs
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), key_style),
                Span::styled(format!(" {} ", label), label_style),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("▌ ", Style::default().fg(ACCENT)),
        Span::styled(title.to_string(), Style::default().bold()),
    ])
}

/// Body of the recipe detail overlay
fn detail_lines(recipe: &Recipe, favorite: bool, loading: bool) -> Vec<Line<'static>> {
    let difficulty = recipe.difficulty();
    let mut lines = Vec::new();

    let mut badges = Vec::new();
    if let Some(category) = &recipe.category {
        badges.push(Span::styled(
            format!(" {} ", category),
            Style::default().fg(Color::White).bg(ACCENT).bold(),
        ));
        badges.push(Span::raw(" "));
    }
    badges.push(Span::styled(
        format!(" {} ", difficulty.label()),
        difficulty_style(difficulty).bold(),
    ));
    badges.push(Span::raw("  "));
    badges.push(if favorite {
        Span::styled("♥ Saved", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡ Not saved", Style::default().fg(Color::Gray))
    });
    lines.push(Line::from(badges));

    let mut meta = Vec::new();
    if let Some(region) = &recipe.area {
        meta.push(Span::raw(format!("◆ {}   ", region)));
    }
    meta.push(Span::raw("⏱ ~30 mins"));
    lines.push(Line::from(meta).fg(Color::Gray));
    lines.push(Line::default());

    // Nutrition cells
    let colors = [Color::LightRed, Color::LightBlue, Color::LightGreen, Color::LightYellow];
    let cells: Vec<Span> = recipe
        .nutrition()
        .cells()
        .into_iter()
        .zip(colors)
        .flat_map(|((label, value), color)| {
            [
                Span::styled(format!(" {} ", label.to_uppercase()), Style::default().fg(color)),
                Span::styled(format!("{}   ", value), Style::default().bold()),
            ]
        })
        .collect();
    lines.push(Line::from(cells));
    lines.push(Line::default());

    if loading {
        lines.push(Line::from(Span::styled(
            "Loading full recipe...",
            Style::default().fg(Color::Gray).italic(),
        )));
        lines.push(Line::default());
    }

    lines.push(section_title("Ingredients"));
    for ingredient in &recipe.ingredients {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} ", ingredient.measure.trim()), Style::default().bold()),
            Span::styled(ingredient.item.clone(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::default());

    lines.push(section_title("Instructions"));
    for (idx, step) in recipe.steps().into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>2} ", idx + 1), Style::default().fg(ACCENT).bold()),
            Span::raw(step.trim().to_string()),
        ]));
    }

    if let Some(video_id) = recipe.video_id() {
        lines.push(Line::default());
        lines.push(section_title("Video Tutorial"));
        lines.push(Line::from(Span::styled(
            format!("  {}", video::embed_url(&video_id)),
            Style::default().fg(Color::LightRed).underlined(),
        )));
    }

    lines
}

fn render_detail(app: &App, recipe: &Recipe, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(
        area.width.saturating_sub(4).min(110),
        area.height.saturating_sub(2),
        area,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", recipe.name))
        .title_bottom(
            Line::from(" c cook · f favorite · s share · Esc close ").alignment(Alignment::Right),
        );

    let lines = detail_lines(recipe, app.is_favorite(&recipe.id), app.detail_loading);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, popup);
}

/// Dots for step progress, windowed around the current step when too many
fn progress_dots(cook: &CookSession, width: usize) -> Line<'static> {
    let total = cook.steps().len();
    let current = cook.current_index();
    let max_dots = (width / 2).max(1);

    let (start, end) = if total <= max_dots {
        (0, total)
    } else {
        let start = current.saturating_sub(max_dots / 2).min(total - max_dots);
        (start, start + max_dots)
    };

    let spans: Vec<Span> = (start..end)
        .map(|i| {
            if i == current {
                Span::styled("━ ", Style::default().fg(ACCENT).bold())
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

fn render_cook_mode(app: &App, cook: &CookSession, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let base = Style::default().bg(Color::Black).fg(Color::White);
    frame.render_widget(Block::default().style(base), area);

    let [title_area, body_area, nav_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    let title = vec![
        Line::from(Span::styled(" Cook Mode", Style::default().fg(ACCENT).bold())),
        Line::from(Span::styled(
            format!(" {}", cook.recipe_name),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(title).style(base), title_area);

    let text_width = body_area.width.saturating_sub(8).min(90) as usize;
    let mut body = Vec::new();
    match (cook.progress_label(), cook.current_step()) {
        (Some(label), Some(step)) => {
            body.push(Line::from(Span::styled(
                label.to_uppercase(),
                Style::default().fg(ACCENT).bold(),
            )));
            body.push(Line::default());
            for line in wrap_text_to_width(step.trim(), text_width) {
                body.push(Line::from(Span::styled(line, Style::default().bold())));
            }
        }
        _ => body.push(Line::from(Span::styled(
            "No step-by-step instructions available for this recipe.",
            Style::default().fg(Color::Gray),
        ))),
    }
    body.push(Line::default());
    body.push(Line::default());

    if cook.timer.is_running() {
        body.push(Line::from(vec![
            Span::styled(
                format!(" ⏱ {} ", cook.timer.display()),
                Style::default().fg(ACCENT).bold(),
            ),
            Span::styled("  x to stop", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        let mut presets = Vec::new();
        for (i, minutes) in app.timer_presets.iter().enumerate().take(9) {
            presets.push(Span::styled(
                format!(" [{}] ⏱ {}m ", i + 1, minutes),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            presets.push(Span::raw("  "));
        }
        body.push(Line::from(presets));
    }

    // Vertically center the body
    let body_height = body.len() as u16;
    let top_pad = body_area.height.saturating_sub(body_height) / 2;
    let [_, centered] =
        Layout::vertical([Constraint::Length(top_pad), Constraint::Min(0)]).areas(body_area);
    frame.render_widget(
        Paragraph::new(body).alignment(Alignment::Center).style(base),
        centered,
    );

    if !cook.steps().is_empty() {
        let [prev_area, dots_area, next_area] = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .areas(nav_area);

        let enabled = Style::default().fg(Color::White).bold();
        let disabled = Style::default().fg(Color::DarkGray);

        let prev_style = if cook.is_first() { disabled } else { enabled };
        let next_style = if cook.is_last() { disabled } else { Style::default().fg(ACCENT).bold() };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" ◀ Prev", prev_style))).style(base),
            prev_area,
        );
        frame.render_widget(
            Paragraph::new(progress_dots(cook, dots_area.width as usize)).style(base),
            dots_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Next ▶ ", next_style)))
                .alignment(Alignment::Right)
                .style(base),
            next_area,
        );
    }
}

fn render_chat(app: &App, frame: &mut Frame, area: Rect) {
    let width = 48.min(area.width.saturating_sub(2));
    let height = 20.min(area.height.saturating_sub(2));
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(" Chef Bot ", Style::default().fg(ACCENT).bold()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [messages_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    // Pre-wrap so the view can stick to the bottom exactly
    let wrap_width = (messages_area.width as usize).saturating_sub(4).max(8);
    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.messages() {
        let (style, alignment) = match message.role {
            ChatRole::User => (Style::default().fg(Color::White).bg(ACCENT), Alignment::Right),
            ChatRole::Bot => (Style::default().fg(Color::White), Alignment::Left),
        };
        for text in wrap_text_to_width(&message.text, wrap_width) {
            lines.push(Line::from(Span::styled(format!(" {} ", text), style)).alignment(alignment));
        }
        lines.push(Line::default());
    }
    if app.chat.is_typing() {
        let dots = ".".repeat(app.animation_frame as usize + 1);
        lines.push(Line::from(Span::styled(
            format!(" typing{}", dots),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let scroll = (lines.len() as u16).saturating_sub(messages_area.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), messages_area);

    let prompt = if app.chat_input.is_empty() {
        Line::from(Span::styled("> Ask something...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(format!("> {}", app.chat_input))
    };
    frame.render_widget(Paragraph::new(prompt), input_area);

    let cursor_x = input_area.x + 2 + app.chat_cursor as u16;
    if cursor_x < input_area.x + input_area.width {
        frame.set_cursor_position((cursor_x, input_area.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_to_width() {
        assert_eq!(
            wrap_text_to_width("Preheat the oven to 350 degrees", 12),
            vec!["Preheat the", "oven to 350", "degrees"]
        );
        assert_eq!(wrap_text_to_width("", 10), vec![""]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Beef Wellington", 20), "Beef Wellington");
        assert_eq!(truncate("Beef Wellington", 5), "Beef…");
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 20, area), Rect::new(25, 10, 50, 20));
        assert_eq!(centered_rect(200, 80, area), area);
    }

    #[test]
    fn test_progress_dots_window() {
        let steps = (0..100).map(|i| format!("step {}", i)).collect();
        let mut cook = CookSession::from_steps("Soup".to_string(), steps);
        for _ in 0..50 {
            cook.next();
        }
        let line = progress_dots(&cook, 20);
        assert_eq!(line.spans.len(), 10);
    }
}
