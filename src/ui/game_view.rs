use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{Board, GameOutcome, GameState, Player, Slot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PIECE: &str = " \u{25cf} ";

/// Name and color a player is shown with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStyle {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    one: PlayerStyle,
    two: PlayerStyle,
}

impl Players {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let style = |player: Player| -> Result<PlayerStyle, ConfigError> {
            let settings = config.player(player);
            Ok(PlayerStyle {
                name: settings.name.trim().to_string(),
                color: settings.color()?,
            })
        };
        Ok(Players {
            one: style(Player::One)?,
            two: style(Player::Two)?,
        })
    }

    pub fn get(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

/// Headline for the current state
pub fn title(state: &GameState, players: &Players) -> String {
    match state.outcome() {
        GameOutcome::Won(player) => format!("{} Won!", players.get(player).name),
        GameOutcome::Tie => "It's a Tie!".to_string(),
        GameOutcome::InProgress => {
            format!("{}'s Turn", players.get(state.current_player()).name)
        }
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &Players,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(game_state.board().rows() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);
    render_board(frame, game_state, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, players: &Players, area: Rect) {
    let color = match game_state.outcome() {
        GameOutcome::Tie => Color::White,
        _ => players.get(game_state.current_player()).color,
    };

    let header = Paragraph::new(title(game_state, players))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn slot_span(slot: Slot, players: &Players) -> Span<'static> {
    match slot.owner() {
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Some(player) => Span::styled(PIECE, Style::default().fg(players.get(player).color)),
    }
}

pub(crate) fn board_lines(
    game_state: &GameState,
    players: &Players,
    selected_column: usize,
) -> Vec<Line<'static>> {
    let board: &Board = game_state.board();
    let mut lines = Vec::new();

    // Column numbers; columns that no longer accept a piece are dimmed
    let mut col_line = vec![Span::raw("   ")];
    for column in 0..board.columns() {
        let label = format!("{:^3}", column + 1);
        let style = if !game_state.column_accepts_piece(column) {
            Style::default().fg(Color::DarkGray)
        } else if column == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let border = "\u{2550}".repeat(board.columns() * 3 + 1);
    lines.push(Line::from(format!("  \u{2554}{border}\u{2557}")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        for column in 0..board.columns() {
            row_spans.push(slot_span(board.get(column, row), players));
        }
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{border}\u{255d}")));

    // Selection indicator, hidden once the game is decided
    let mut indicator_line = vec![Span::raw("   ")];
    for column in 0..board.columns() {
        if column == selected_column && !game_state.is_terminal() {
            indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    players: &Players,
    selected_column: usize,
    area: Rect,
) {
    let lines = board_lines(game_state, players, selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("\u{2190}/\u{2192}: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, ROWS};

    fn players() -> Players {
        let mut config = AppConfig::default();
        config.player1.name = "Dima".to_string();
        config.player2.name = "Ana".to_string();
        Players::from_config(&config).unwrap()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_title_follows_turns() {
        let players = players();
        let mut game = Game::new();
        assert_eq!(title(game.state(), &players), "Dima's Turn");

        game.drop_piece(2).unwrap();
        assert_eq!(title(game.state(), &players), "Ana's Turn");
    }

    #[test]
    fn test_title_announces_winner() {
        let players = players();
        let mut game = Game::new();
        for column in [1, 2, 1, 2, 1, 2, 1] {
            game.drop_piece(column).unwrap();
        }
        assert_eq!(title(game.state(), &players), "Dima Won!");
    }

    #[test]
    fn test_title_announces_tie() {
        let players = players();
        let mut game = Game::with_board_size(4, 1).unwrap();
        for column in [0, 3, 1, 2] {
            game.drop_piece(column).unwrap();
        }
        assert_eq!(title(game.state(), &players), "It's a Tie!");
    }

    #[test]
    fn test_players_from_config_trims_names() {
        let mut config = AppConfig::default();
        config.player1.name = "  Dima ".to_string();
        config.player1.color = "#6ecf9c".to_string();
        let players = Players::from_config(&config).unwrap();
        assert_eq!(players.get(Player::One).name, "Dima");
        assert_eq!(players.get(Player::One).color, Color::Rgb(0x6e, 0xcf, 0x9c));
    }

    #[test]
    fn test_board_lines_shape() {
        let game = Game::new();
        let lines = board_lines(game.state(), &players(), 3);
        // labels, top border, rows, bottom border, indicator
        assert_eq!(lines.len(), ROWS + 4);
        assert_eq!(line_text(&lines[2]), format!("  \u{2551}{} \u{2551}", " . ".repeat(7)));
        assert!(line_text(&lines[ROWS + 3]).contains('\u{25b2}'));
    }

    #[test]
    fn test_board_lines_show_pieces() {
        let mut game = Game::new();
        game.drop_piece(0).unwrap();
        let lines = board_lines(game.state(), &players(), 0);
        let bottom = &lines[ROWS + 1];
        // Leading border span, then one span per column
        assert_eq!(bottom.spans[1].content.as_ref(), PIECE);
        assert_eq!(bottom.spans[1].style.fg, Some(Color::Red));
        assert_eq!(bottom.spans[2].content.as_ref(), " . ");
    }

    #[test]
    fn test_full_column_label_is_dimmed() {
        let mut game = Game::new();
        for _ in 0..ROWS {
            game.drop_piece(1).unwrap();
        }
        let lines = board_lines(game.state(), &players(), 1);
        let label = &lines[0].spans[2];
        assert_eq!(label.content.as_ref(), " 2 ");
        assert_eq!(label.style.fg, Some(Color::DarkGray));
    }
}
