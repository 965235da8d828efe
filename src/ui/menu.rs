use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[P]/[Enter] Resume"),
        Line::from("[R] Restart  [Q] Quit"),
    ];
    render_popup(frame, area, " pause ", lines, 60, 40);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    previous_high_score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let is_new_high = score > previous_high_score;
    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {}", score.max(previous_high_score))),
        Line::from(death_cause(death_reason)),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[R]/[Enter] Play again  [Q] Quit"),
    ];
    render_popup(frame, area, " game over ", lines, 70, 60);
}

/// Draws the end screen shown when no cell is left for the apple.
pub fn render_board_full_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        title_line("BOARD FULL", theme),
        Line::from(""),
        Line::from("No room left for another apple."),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[R]/[Enter] Play again  [Q] Quit"),
    ];
    render_popup(frame, area, " you win ", lines, 70, 50);
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit the wall",
        Some(DeathReason::SelfCollision) => "Cause: bit yourself",
        Some(DeathReason::ObstacleCollision) => "Cause: hit a rock",
        None => "",
    }
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.popup_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    width_percent: u16,
    height_percent: u16,
) {
    let popup = centered_popup(area, width_percent, height_percent);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::DeathReason;

    use super::{centered_popup, death_cause};

    #[test]
    fn popup_is_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 50);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn every_death_reason_has_a_caption() {
        for reason in [
            DeathReason::WallCollision,
            DeathReason::SelfCollision,
            DeathReason::ObstacleCollision,
        ] {
            assert!(!death_cause(Some(reason)).is_empty());
        }
        assert!(death_cause(None).is_empty());
    }
}
