use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::board::Coordinate;
use crate::config::{
    BORDER_PLAY_AREA, BOARD_SIZE, CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD, THEME, Theme,
};
use crate::game::{RunStatus, Snapshot};
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

const BOARD_CELLS: u16 = BOARD_SIZE as u16;

/// Terminal columns taken by the bordered board.
pub const BOARD_WIDTH: u16 = BOARD_CELLS * CELL_WIDTH + 2;

/// Terminal rows taken by the bordered board.
pub const BOARD_HEIGHT: u16 = BOARD_CELLS + 2;

/// Renders the full game frame from one snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let theme = &THEME;
    let frame_area = centered(frame.area(), BOARD_WIDTH, BOARD_HEIGHT + HUD_HEIGHT);

    let hud_area = Rect {
        height: HUD_HEIGHT.min(frame_area.height),
        ..frame_area
    };
    let play_area = Rect {
        y: frame_area.y.saturating_add(hud_area.height),
        height: frame_area.height.saturating_sub(hud_area.height),
        ..frame_area
    };

    render_hud(frame, hud_area, snapshot, theme);

    let block = Block::bordered()
        .border_set(BORDER_PLAY_AREA)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot.food, theme);
    render_snake(frame, inner, &snapshot.snake, theme);

    match snapshot.status {
        RunStatus::Paused if snapshot.is_start_screen() => {
            render_start_menu(frame, play_area, theme);
        }
        RunStatus::Paused => render_pause_menu(frame, play_area, snapshot.score, theme),
        RunStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.level,
            snapshot.death_reason,
            theme,
        ),
        RunStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Coordinate, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snake: &[Coordinate], theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Paint tail to head so the head wins if cells ever coincide.
    for (index, segment) in snake.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, position: Coordinate) -> Option<(u16, u16)> {
    if !position.is_within_bounds() {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::board::Coordinate;
    use crate::game::{DeathReason, GameState, RunStatus};

    use super::{BOARD_HEIGHT, BOARD_WIDTH, logical_to_terminal, render};
    use crate::ui::hud::HUD_HEIGHT;

    fn draw(snapshot: &crate::game::Snapshot) -> Buffer {
        let backend = TestBackend::new(BOARD_WIDTH + 4, BOARD_HEIGHT + HUD_HEIGHT + 2);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render(frame, snapshot))
            .expect("draw should succeed");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn start_screen_shows_ready_prompt() {
        let snapshot = GameState::new_with_seed(1).snapshot();

        let rendered = text(&draw(&snapshot));

        assert!(rendered.contains("READY?"));
        assert!(rendered.contains("SNAKE"));
    }

    #[test]
    fn running_game_draws_snake_and_food() {
        let mut state = GameState::new_with_seed(2);
        state.status = RunStatus::Running;

        let rendered = text(&draw(&state.snapshot()));

        assert!(rendered.contains("██"));
        assert!(rendered.contains("▓▓"));
        assert!(rendered.contains("()"));
        assert!(!rendered.contains("READY?"));
    }

    #[test]
    fn game_over_shows_cause() {
        let mut state = GameState::new_with_seed(3);
        state.status = RunStatus::GameOver;
        state.death_reason = Some(DeathReason::WallCollision);

        let rendered = text(&draw(&state.snapshot()));

        assert!(rendered.contains("GAME OVER"));
        assert!(rendered.contains("hit the wall"));
    }

    #[test]
    fn cells_map_to_two_columns() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(logical_to_terminal(inner, Coordinate::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, Coordinate::new(3, 2)), Some((7, 3)));
        assert_eq!(logical_to_terminal(inner, Coordinate::new(-1, 0)), None);
    }
}
