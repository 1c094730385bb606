use super::app::{App, GameMode};
use crate::game::{Board, Cell, Player, RoundState};
use crate::session::SessionMetrics;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let rows = app.round().board().rows() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(rows + 4),    // Board
            Constraint::Length(3),        // Message
            Constraint::Length(3),        // Score
            Constraint::Length(4),        // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app.round().board(), app.selected_column(), chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_score(frame, app.metrics(), chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let round = app.round();
    let config = round.board().config();
    let mode = app.mode().label();
    let (status, color) = match round.state() {
        RoundState::InProgress => {
            let player = round.current_player();
            let who = match (app.mode(), player) {
                (GameMode::VsComputer, Player::Yellow) => "Computer",
                _ => player.name(),
            };
            (format!("Current Player: {who}  |  {mode}"), player_color(player))
        }
        RoundState::Won(player) => (
            format!("{} wins  |  {mode}", player.name()),
            player_color(player),
        ),
        RoundState::Draw => (format!("Draw  |  {mode}"), Color::Blue),
    };

    let title = format!(
        "Connect {} ({}x{})",
        config.win_length(),
        config.rows(),
        config.cols()
    );
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let cols = board.cols();
    let border = "═".repeat(cols * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for column in 1..=cols {
        let label = format!("{column:^3}");
        if column == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for column in 1..=cols {
        if column == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_score(frame: &mut Frame, metrics: &SessionMetrics, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Red ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}   ", metrics.wins(Player::Red))),
        Span::styled(
            "Yellow ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}   ", metrics.wins(Player::Yellow))),
        Span::raw(format!("Draws {}", metrics.draws())),
    ]);

    let score = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(score, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9, 0: Drop in column");
    let line2 = Line::from("U: Take back  |  M: Switch mode  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicConfig;
    use crate::game::BoardConfig;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_header_and_board_size() {
        let app = App::new(
            BoardConfig::new(5, 8, 4).unwrap(),
            GameMode::TwoPlayer,
            HeuristicConfig::default(),
        );
        let screen = draw(&app);
        assert!(screen.contains("Connect 4 (5x8)"));
        assert!(screen.contains("Current Player: Red"));
        assert!(screen.contains(&format!("╔{}╗", "═".repeat(25))));
    }

    #[test]
    fn renders_result_and_score() {
        let mut app = App::new(BoardConfig::default(), GameMode::TwoPlayer, HeuristicConfig::default());
        for c in ['1', '1', '2', '2', '3', '3', '4'] {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        let screen = draw(&app);
        assert!(screen.contains("Red wins"));
        assert!(screen.contains("Draws 0"));
    }
}
