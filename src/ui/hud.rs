use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;
use crate::session::Session;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, session: &Session) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_area = inset_horizontal(score_area, HUD_MARGIN_X);
    let status_area = inset_horizontal(status_area, HUD_MARGIN_X);
    let theme = session.theme();

    let values = ScoreValues {
        length: state.snake.len(),
        score: state.score(),
        high_score: session.high_score(),
    };
    frame.render_widget(
        Paragraph::new(score_line(values, usize::from(score_area.width), theme))
            .alignment(Alignment::Right),
        score_area,
    );

    let bounds = state.bounds();
    let mut flags = vec![state.difficulty().label()];
    if session.night_mode {
        flags.push("night");
    }
    if session.muted {
        flags.push("muted");
    }
    let status = format!(
        "{}x{}{SEPARATOR}rocks: {}{SEPARATOR}{}",
        bounds.width,
        bounds.height,
        state.obstacles().len(),
        flags.join(" "),
    );
    frame.render_widget(
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud_text)),
        status_area,
    );

    play_area
}

#[derive(Debug, Clone, Copy)]
struct ScoreValues {
    length: usize,
    score: u32,
    high_score: u32,
}

fn score_line(values: ScoreValues, available_width: usize, theme: &Theme) -> Line<'static> {
    let compact = score_line_text(values, false).width() > available_width;
    let (length_label, score_label, high_label) = labels(compact);
    let new_best = values.score > values.high_score;

    let value_style = Style::default()
        .fg(theme.hud_text)
        .add_modifier(Modifier::BOLD);
    let high_style = if new_best {
        Style::default().fg(theme.apple).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.hud_text)
    };

    Line::from(vec![
        Span::raw(format!("{length_label}: ")),
        Span::styled(values.length.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{score_label}: ")),
        Span::styled(values.score.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{high_label}: ")),
        Span::styled(values.high_score.max(values.score).to_string(), high_style),
    ])
}

fn score_line_text(values: ScoreValues, compact: bool) -> String {
    let (length_label, score_label, high_label) = labels(compact);
    format!(
        "{length_label}: {}{SEPARATOR}{score_label}: {}{SEPARATOR}{high_label}: {}",
        values.length,
        values.score,
        values.high_score.max(values.score),
    )
}

fn labels(compact: bool) -> (&'static str, &'static str, &'static str) {
    if compact {
        ("L", "S", "H")
    } else {
        ("Length", "Score", "High score")
    }
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
