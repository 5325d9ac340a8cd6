//! TUI rendering with ratatui.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::content::AchievementKind;

use super::app::{AppState, Section};

/// Per-category accent colours for the skills grid, cycled in order.
const SKILL_COLORS: &[Color] = &[Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];

/// Draw the entire TUI.
pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    // Main layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(f, main_chunks[0], state);
    match state.section {
        Section::Hero => draw_hero(f, main_chunks[1], state),
        Section::Skills => draw_skills(f, main_chunks[1], state),
        Section::Projects => draw_projects(f, main_chunks[1], state),
        Section::Achievements => draw_achievements(f, main_chunks[1], state),
    }
    draw_footer(f, main_chunks[2], state);
}

/// Draw the header bar: brand, typewriter line, section tabs.
fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let caret = if state.caret_visible { "▌" } else { " " };

    let mut spans = vec![
        Span::styled(
            " ◉ folio",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Hello, I'm ", Style::default().fg(Color::White)),
        Span::styled(
            state.typewriter.visible().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(caret, Style::default().fg(Color::Cyan)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
    ];

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == state.section {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, section.title()), style));
        spans.push(Span::raw("  "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(header, area);
}

/// Draw the hero section: identity, tagline, stats, links.
fn draw_hero(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Identity
            Constraint::Min(4),    // Tagline
            Constraint::Length(5), // Stats
            Constraint::Length(5), // Links
        ])
        .split(area);

    let profile = &state.profile;

    let identity = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::styled(profile.status.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.headline.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            profile.location.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(identity).block(panel(" About ", Color::Cyan)),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(profile.tagline.clone())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(panel(" Profile ", Color::White)),
        chunks[1],
    );

    draw_stats_row(f, chunks[2], state);

    let link_lines: Vec<Line> = profile
        .links
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", link.label),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(link.url.clone(), Style::default().fg(Color::Blue)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(link_lines).block(panel(" Links ", Color::Green)),
        chunks[3],
    );
}

/// Draw the hero stats as a row of small panels.
fn draw_stats_row(f: &mut Frame, area: Rect, state: &AppState) {
    let stats = &state.profile.stats;
    if stats.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> =
        stats.iter().map(|_| Constraint::Ratio(1, stats.len() as u32)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, chunk) in stats.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.label.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines).centered().block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .border_set(symbols::border::ROUNDED),
            ),
            *chunk,
        );
    }
}

/// Draw the skills grid, two categories per row.
fn draw_skills(f: &mut Frame, area: Rect, state: &AppState) {
    let categories = &state.profile.skills;
    if categories.is_empty() {
        f.render_widget(
            Paragraph::new("No skills configured.")
                .style(Style::default().fg(Color::DarkGray))
                .block(panel(" Technical Expertise ", Color::Cyan)),
            area,
        );
        return;
    }

    let rows = categories.len().div_ceil(2);
    let row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect();
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, pair) in categories.chunks(2).enumerate() {
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row_chunks[row]);

        for (col, category) in pair.iter().enumerate() {
            let color = SKILL_COLORS[(row * 2 + col) % SKILL_COLORS.len()];
            let tags: Vec<Span> = category
                .skills
                .iter()
                .flat_map(|skill| {
                    vec![
                        Span::styled(
                            format!(" {skill} "),
                            Style::default().fg(Color::White).bg(Color::Black),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();

            f.render_widget(
                Paragraph::new(Line::from(tags))
                    .wrap(Wrap { trim: true })
                    .block(panel(&format!(" {} ", category.title), color)),
                col_chunks[col],
            );
        }
    }
}

/// Draw the project gallery: selectable list plus detail pane.
fn draw_projects(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Project list
            Constraint::Min(40),    // Detail
        ])
        .split(area);

    let projects = state.visible_projects();

    let items: Vec<ListItem> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let marker = if project.featured { "★ " } else { "  " };
            let (prefix, style) = if i == state.selected_project {
                (
                    "▸ ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Cyan)),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(truncate_line(&project.title, 26), style),
            ]))
        })
        .collect();

    f.render_widget(
        List::new(items).block(panel(" Featured Projects ", Color::Cyan)),
        chunks[0],
    );

    let Some(project) = projects.get(state.selected_project) else {
        f.render_widget(
            Paragraph::new("No projects configured.")
                .style(Style::default().fg(Color::DarkGray))
                .block(panel(" Project ", Color::DarkGray)),
            chunks[1],
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        project.description.clone(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    let mut tech_spans = vec![Span::styled("Tech: ", Style::default().fg(Color::DarkGray))];
    for tech in &project.tech {
        tech_spans.push(Span::styled(
            format!(" {tech} "),
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        tech_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tech_spans));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Link: ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.link.clone(), Style::default().fg(Color::Blue)),
    ]));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Project ", Color::White)),
        chunks[1],
    );
}

/// Draw achievements: competitions on the left, community on the right.
fn draw_achievements(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_achievement_column(
        f,
        chunks[0],
        state,
        AchievementKind::Competition,
        " Competitions & Hackathons ",
        Color::Yellow,
    );
    draw_achievement_column(
        f,
        chunks[1],
        state,
        AchievementKind::Community,
        " Community ",
        Color::Red,
    );
}

/// Draw one achievements column.
fn draw_achievement_column(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    kind: AchievementKind,
    title: &str,
    color: Color,
) {
    let mut lines: Vec<Line> = Vec::new();
    for achievement in state.profile.achievements_of(kind) {
        let mut heading = vec![Span::styled(
            achievement.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(ref date) = achievement.date {
            heading.push(Span::styled(
                format!("  ({date})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(
            achievement.subtitle.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            achievement.link.clone(),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(none)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(title, color)),
        area,
    );
}

/// Draw the footer bar: key help, or transient status feedback.
fn draw_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(ref status) = state.status_line {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" quit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("tab/1-4", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" sections  ", Style::default().fg(Color::DarkGray)),
            Span::styled("j/k", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" select project  ", Style::default().fg(Color::DarkGray)),
            Span::styled("c", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" copy link", Style::default().fg(Color::DarkGray)),
        ])
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(footer, area);
}

/// Bordered panel with a coloured title, the standard block for this UI.
fn panel(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_set(symbols::border::ROUNDED)
}

/// Truncate a line to fit within width.
fn truncate_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        line.to_string()
    } else {
        let truncated: String = line.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_line_short_input_unchanged() {
        assert_eq!(truncate_line("Gemini Clone", 26), "Gemini Clone");
    }

    #[test]
    fn test_truncate_line_long_input_ellipsised() {
        let truncated = truncate_line("Real-Time Chat Application", 10);
        assert_eq!(truncated, "Real-Ti...");
        assert_eq!(truncated.chars().count(), 10);
    }
}
