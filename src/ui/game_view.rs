use crate::game::{Board, CarName, Coord, BOARD_SIZE, EXIT, EXIT_ROW};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    board: &Board,
    selected: Option<CarName>,
    moves: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, board, selected, moves, chunks[0]);
    render_board(frame, board, selected, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    board: &Board,
    selected: Option<CarName>,
    moves: usize,
    area: ratatui::layout::Rect,
) {
    let (status, color) = if board.is_solved() {
        (format!("Solved in {} moves!", moves), Color::Green)
    } else {
        match selected {
            Some(name) => (
                format!("Moves: {}  |  Selected: {}", moves, name.letter()),
                car_color(name),
            ),
            None => (format!("Moves: {}", moves), Color::White),
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gridlock"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected: Option<CarName>,
    area: ratatui::layout::Rect,
) {
    let size = BOARD_SIZE as i16;
    let mut lines = Vec::new();

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..size {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..size {
            match board.cell_content(Coord::new(row, col)) {
                Some(name) => {
                    let mut style = Style::default().fg(car_color(name));
                    if selected == Some(name) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                    }
                    row_spans.push(Span::styled(format!(" {} ", name.letter()), style));
                }
                None => {
                    row_spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray)));
                }
            }
        }

        // The right wall opens onto the exit; a tail resting on the
        // sentinel is drawn in the opening.
        if row == EXIT_ROW {
            match board.cars().iter().find(|car| car.tail() == EXIT) {
                Some(car) => row_spans.push(Span::styled(
                    format!(" {}", car.name().letter()),
                    Style::default()
                        .fg(car_color(car.name()))
                        .add_modifier(Modifier::BOLD),
                )),
                None => row_spans.push(Span::styled(" →", Style::default().fg(Color::Green))),
            }
        } else {
            row_spans.push(Span::raw(" ║"));
        }
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("Y/B/O/W/G/R: Select Car  |  Tab: Next Car");
    let line2 = Line::from("u/d/l/r or Arrows: Slide  |  N: New Game  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn car_color(name: CarName) -> Color {
    match name {
        CarName::Yellow => Color::Yellow,
        CarName::Blue => Color::Blue,
        CarName::Orange => Color::LightRed,
        CarName::White => Color::White,
        CarName::Green => Color::Green,
        CarName::Red => Color::Red,
    }
}
