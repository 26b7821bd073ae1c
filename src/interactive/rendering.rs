//! TUI rendering with ratatui
//!
//! Board, family breakdown and message log for a hangman round.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::{Choice, RoundStatus};
use crate::output::formatters::format_guesses;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Family rows shown for the last guess
const MAX_FAMILY_ROWS: usize = 8;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("EVIL HANGMAN - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_families(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = &app.round;
    let pattern_color = match round.status() {
        RoundStatus::Active => Color::Yellow,
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost => Color::Red,
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            round.current_pattern().spaced(),
            Style::default()
                .fg(pattern_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::raw("Guessed: "),
            Span::styled(
                format_guesses(&round.guesses_made_sorted()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    if let Some(secret) = app.secret {
        content.push(Line::from(vec![
            Span::raw("Secret:  "),
            Span::styled(
                secret.to_string(),
                Style::default()
                    .fg(pattern_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(
                    " {}-letter word, {} difficulty ",
                    app.config.word_length, app.config.difficulty
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_families(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(ref last) = app.last_guess {
        let choice = match last.choice {
            Choice::Hardest => "hardest",
            Choice::SecondHardest => "second hardest",
        };
        let mut lines = vec![Line::from(format!(
            "'{}' split {} families, kept the {choice}:",
            last.letter,
            last.families.len()
        ))];

        for (pattern, size) in last.families.iter().take(MAX_FAMILY_ROWS) {
            let style = if *pattern == last.chosen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<12}", pattern.as_str()), style),
                Span::styled(format!(" {size} words"), style),
            ]));
        }
        if last.families.len() > MAX_FAMILY_ROWS {
            lines.push(Line::from(format!(
                "  ... {} more",
                last.families.len() - MAX_FAMILY_ROWS
            )));
        }
        lines
    } else {
        vec![Line::from("No guesses yet")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Word Families ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let left = app.round.guesses_left();
    let budget = app.config.guess_budget;
    // Cast is safe: ratio is at most 100
    let percent = if budget == 0 {
        0
    } else {
        (u64::from(left) * 100 / u64::from(budget)) as u16
    };

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{budget}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
                MessageStyle::Debug => Style::default().fg(Color::DarkGray),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_percent()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let candidates_text = format!("Candidates: {}", app.round.remaining_candidate_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Tab: New Round | Esc: Quit",
        InputMode::RoundOver => "n: New Round | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
