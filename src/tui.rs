use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::app::{App, Effect, Message};
use crate::auth::AuthMode;
use crate::dashboard::{Dashboard, LISTING_PREVIEW_LIMIT, REQUIREMENT_PREVIEW_LIMIT, Tab};
use crate::dispatch::Dispatcher;
use crate::employer::{EMPLOYER_COUNTERS, EmployerAction};
use crate::models::RecommendationDomain;
use crate::router::View;
use crate::store::Storage;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    Email,
    Name,
    Role,
}

impl Field {
    /// Name is only on the form in register-mode.
    fn next(self, mode: AuthMode) -> Self {
        match (self, mode) {
            (Self::Email, AuthMode::Register) => Self::Name,
            (Self::Email, AuthMode::Login) | (Self::Name, _) => Self::Role,
            (Self::Role, _) => Self::Email,
        }
    }

    fn prev(self, mode: AuthMode) -> Self {
        match (self, mode) {
            (Self::Email, _) => Self::Role,
            (Self::Name, _) => Self::Email,
            (Self::Role, AuthMode::Register) => Self::Name,
            (Self::Role, AuthMode::Login) => Self::Email,
        }
    }
}

/// Presentation-only state.
#[derive(Debug, Default)]
struct UiState {
    focus: Field,
    scroll_offset: u16,
}

impl UiState {
    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}

enum Action {
    None,
    Quit,
    Send(Message),
}

pub fn run_ui<S: Storage>(
    app: &mut App<S>,
    initial: Vec<Effect>,
    dispatcher: &Dispatcher,
    completions: &Receiver<Message>,
) -> Result<()> {
    dispatcher.dispatch_all(initial);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, app, dispatcher, completions);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop<S: Storage>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App<S>,
    dispatcher: &Dispatcher,
    completions: &Receiver<Message>,
) -> Result<()> {
    let mut ui = UiState::default();

    loop {
        terminal.draw(|frame| draw(frame, app, &ui))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(app, &mut ui, key) {
                        Action::Quit => break,
                        Action::Send(message) => dispatcher.dispatch_all(app.update(message)),
                        Action::None => {}
                    }
                }
            }
        }

        while let Ok(message) = completions.try_recv() {
            dispatcher.dispatch_all(app.update(message));
        }
    }
    Ok(())
}

fn handle_key<S: Storage>(app: &mut App<S>, ui: &mut UiState, key: KeyEvent) -> Action {
    if app.notice().is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Action::Send(Message::DismissNotice),
            _ => Action::None,
        };
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.view() {
        View::Anonymous => handle_auth_key(app, ui, key),
        View::CandidateDashboard => handle_candidate_key(ui, key),
        View::EmployerDashboard => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('l') => Action::Send(Message::Logout),
            _ => Action::None,
        },
    }
}

fn handle_auth_key<S: Storage>(app: &mut App<S>, ui: &mut UiState, key: KeyEvent) -> Action {
    let mode = app.auth_form().mode;
    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Enter => return Action::Send(Message::SubmitAuth),
        KeyCode::F(2) => {
            ui.focus = Field::Email;
            return Action::Send(Message::ToggleAuthMode);
        }
        KeyCode::Tab | KeyCode::Down => ui.focus = ui.focus.next(mode),
        KeyCode::BackTab | KeyCode::Up => ui.focus = ui.focus.prev(mode),
        _ => {}
    }

    if app.session().is_busy() {
        return Action::None;
    }

    let form = app.auth_form_mut();
    match (ui.focus, key.code) {
        (Field::Role, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => form.role = form.role.toggled(),
        (Field::Email, KeyCode::Backspace) => {
            form.email.pop();
        }
        (Field::Name, KeyCode::Backspace) => {
            form.name.pop();
        }
        (Field::Email, KeyCode::Char(c)) => form.email.push(c),
        (Field::Name, KeyCode::Char(c)) => form.name.push(c),
        _ => {}
    }
    Action::None
}

fn handle_candidate_key(ui: &mut UiState, key: KeyEvent) -> Action {
    let tab_change = |ui: &mut UiState, message| {
        ui.scroll_offset = 0;
        Action::Send(message)
    };
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('l') => Action::Send(Message::Logout),
        KeyCode::Char('g') | KeyCode::Enter => Action::Send(Message::RequestRecommendations),
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            tab_change(ui, Message::SelectTab(Tab::ALL[index]))
        }
        KeyCode::Right | KeyCode::Tab => tab_change(ui, Message::NextTab),
        KeyCode::Left | KeyCode::BackTab => tab_change(ui, Message::PrevTab),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
            ui.scroll_down();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
            ui.scroll_up();
            Action::None
        }
        _ => Action::None,
    }
}

// --- Drawing ---

fn draw<S: Storage>(frame: &mut Frame, app: &App<S>, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    let view = app.view();
    match (view, app.dashboard()) {
        (View::Anonymous, _) => draw_anonymous(frame, app, ui, chunks[1]),
        (View::CandidateDashboard, Some(dashboard)) => draw_candidate(frame, dashboard, ui, chunks[1]),
        (View::CandidateDashboard, None) => {}
        (View::EmployerDashboard, _) => draw_employer(frame, chunks[1]),
    }

    let help = match view {
        View::Anonymous => " Tab:next field  ←/→:role  Enter:submit  F2:sign in/register  Esc:quit",
        View::CandidateDashboard => " 1-4/←→:tabs  g:get AI picks  j/k:scroll  l:sign out  q:quit",
        View::EmployerDashboard => " l:sign out  q:quit",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice);
    }
}

fn draw_header<S: Storage>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let greeting = match app.session().identity() {
        Some(identity) => Line::from(vec![
            Span::styled("CareerBridge", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   Hello, {} ", identity.name)),
            Span::styled(
                format!("({})", identity.role().label()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        None => Line::from(vec![
            Span::styled("CareerBridge", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   Welcome to CareerBridge"),
        ]),
    };
    let header = Paragraph::new(greeting).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_anonymous<S: Storage>(frame: &mut Frame, app: &App<S>, ui: &UiState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            "Smart recruiting platform",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Connecting candidates and employers through AI."),
        Line::from("Find the right job, get course suggestions, grow your career."),
        Line::from(""),
        Line::from("  * AI job search      matching job suggestions"),
        Line::from("  * Find candidates    AI suggests the best applicants"),
        Line::from("  * AI courses         skills worth learning next"),
    ];
    frame.render_widget(
        Paragraph::new(hero)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let form = app.auth_form();
    let field_style = |field: Field| {
        if ui.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Email: {}", form.email), field_style(Field::Email))),
    ];
    if form.mode == AuthMode::Register {
        lines.push(Line::from(Span::styled(format!("Name:  {}", form.name), field_style(Field::Name))));
    }
    lines.push(Line::from(Span::styled(
        format!("Role:  < {} >", form.role.label()),
        field_style(Field::Role),
    )));
    lines.push(Line::from(""));
    if app.session().is_busy() {
        lines.push(Line::from(Span::styled("Submitting...", Style::default().fg(Color::Yellow))));
    } else {
        lines.push(Line::from(format!("[Enter] {}", form.mode.title())));
    }
    lines.push(Line::from(Span::styled(
        match form.mode {
            AuthMode::Login => "No account yet? F2 to register",
            AuthMode::Register => "Already have an account? F2 to sign in",
        },
        Style::default().fg(Color::DarkGray),
    )));

    let title = format!(" {} ", form.mode.title());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        chunks[1],
    );
}

fn draw_candidate(frame: &mut Frame, dashboard: &Dashboard, ui: &UiState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == dashboard.tab()).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Candidate dashboard "))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    match dashboard.tab() {
        Tab::Overview => draw_overview(frame, dashboard, chunks[1]),
        Tab::Listings => draw_listings(frame, dashboard, ui, chunks[1]),
        Tab::AiJobs => draw_recommendations(frame, dashboard, RecommendationDomain::Jobs, ui, chunks[1]),
        Tab::AiCourses => draw_recommendations(frame, dashboard, RecommendationDomain::Courses, ui, chunks[1]),
    }
}

fn draw_counters(frame: &mut Frame, counters: &[(&str, String)], area: Rect) {
    let constraints: Vec<Constraint> = counters
        .iter()
        .map(|_| Constraint::Ratio(1, counters.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for ((label, value), cell) in counters.iter().zip(cells.iter()) {
        let text = vec![
            Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(value.clone(), Style::default().add_modifier(Modifier::BOLD))),
        ];
        frame.render_widget(Paragraph::new(text).block(Block::default().borders(Borders::ALL)), *cell);
    }
}

fn draw_overview(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let counters = [
        ("Matching jobs", dashboard.listing_count().to_string()),
        ("Profile complete", "75%".to_string()),
        ("AI score", "8.5/10".to_string()),
    ];
    draw_counters(frame, &counters, chunks[0]);

    let activity: Vec<ListItem> = [
        "You viewed 5 new jobs today",
        "Your profile was viewed 12 times this week",
        "AI suggested 3 new courses for you",
    ]
    .iter()
    .map(|line| ListItem::new(format!("* {}", line)))
    .collect();
    frame.render_widget(
        List::new(activity).block(Block::default().borders(Borders::ALL).title(" Recent activity ")),
        chunks[1],
    );
}

fn draw_listings(frame: &mut Frame, dashboard: &Dashboard, ui: &UiState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let wrap_width = usize::from(area.width.saturating_sub(4)).max(20);

    if dashboard.listings().is_empty() {
        lines.push(Line::from(Span::styled(
            if dashboard.listings_loaded() { "No jobs found." } else { "Loading jobs..." },
            Style::default().fg(Color::DarkGray),
        )));
    }

    for job in dashboard.listings().iter().take(LISTING_PREVIEW_LIMIT) {
        lines.push(Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let mut meta = format!("@ {}", job.location());
        if let Some(pay) = job.pay_range() {
            meta.push_str(&format!("   Pay: {}", pay));
        }
        lines.push(Line::from(meta));
        for line in textwrap::wrap(job.description(), wrap_width).into_iter().take(2) {
            lines.push(Line::from(line.into_owned()));
        }
        let tags: Vec<Span> = job
            .requirements()
            .iter()
            .take(REQUIREMENT_PREVIEW_LIMIT)
            .map(|req| Span::styled(format!("[{}] ", req), Style::default().fg(Color::Cyan)))
            .collect();
        if !tags.is_empty() {
            lines.push(Line::from(tags));
        }
        lines.push(Line::from(""));
    }

    let title = format!(" All jobs ({}) ", dashboard.listing_count());
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((ui.scroll_offset, 0)),
        area,
    );
}

fn draw_recommendations(
    frame: &mut Frame,
    dashboard: &Dashboard,
    tab_domain: RecommendationDomain,
    ui: &UiState,
    area: Rect,
) {
    let (title, action, empty_heading, empty_body) = match tab_domain {
        RecommendationDomain::Jobs => (
            " AI job picks ",
            "[g] Get AI picks",
            "AI is ready to help you find a job!",
            "Press g to get the job suggestions that fit you best.",
        ),
        RecommendationDomain::Courses => (
            " AI course picks ",
            "[g] Get course picks",
            "Grow your skills with AI!",
            "AI will review your profile and suggest the best courses for your career.",
        ),
    };

    let mut lines = vec![Line::from(action)];
    if let Some(domain) = dashboard.loading() {
        lines.push(Line::from(Span::styled(
            format!("Asking the AI for {} suggestions...", domain),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));

    match dashboard.recommendation() {
        Some(recommendation) => {
            let heading = match recommendation.domain {
                RecommendationDomain::Jobs => "AI has analysed your profile:",
                RecommendationDomain::Courses => "Courses the AI suggests for you:",
            };
            lines.push(Line::from(Span::styled(
                heading,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )));
            for line in recommendation.payload.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                empty_heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(empty_body));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((ui.scroll_offset, 0)),
        area,
    );
}

fn draw_employer(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new("Manage hiring and find matching candidates")
            .block(Block::default().borders(Borders::ALL).title(" Employer dashboard ")),
        chunks[0],
    );

    let counters: Vec<(&str, String)> = EMPLOYER_COUNTERS
        .iter()
        .map(|(label, value)| (*label, value.to_string()))
        .collect();
    draw_counters(frame, &counters, chunks[1]);

    let actions: Vec<ListItem> = EmployerAction::ALL
        .iter()
        .map(|action| {
            ListItem::new(vec![
                Line::from(Span::styled(action.title(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(action.description(), Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();
    frame.render_widget(
        List::new(actions).block(Block::default().borders(Borders::ALL).title(" Employer tools ")),
        chunks[2],
    );
}

fn draw_notice(frame: &mut Frame, notice: &str) {
    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(vec![
        Line::from(Span::styled(notice, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Notice "));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::models::Role;
    use crate::store::MemoryStorage;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<S: Storage>(app: &mut App<S>, ui: &mut UiState, text: &str) {
        for c in text.chars() {
            assert!(matches!(handle_key(app, ui, press(KeyCode::Char(c))), Action::None));
        }
    }

    fn rendered<S: Storage>(app: &App<S>, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app, ui)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_field_focus_skips_name_in_login_mode() {
        assert_eq!(Field::Email.next(AuthMode::Login), Field::Role);
        assert_eq!(Field::Email.next(AuthMode::Register), Field::Name);
        assert_eq!(Field::Role.prev(AuthMode::Login), Field::Email);
        assert_eq!(Field::Role.prev(AuthMode::Register), Field::Name);
    }

    #[test]
    fn test_typing_and_submitting_login_form() {
        let (mut app, _) = App::start(MemoryStorage::new(), AppOptions::default());
        let mut ui = UiState::default();

        type_text(&mut app, &mut ui, "a@x.com");
        handle_key(&mut app, &mut ui, press(KeyCode::Tab));
        handle_key(&mut app, &mut ui, press(KeyCode::Right));
        assert_eq!(app.auth_form().email, "a@x.com");
        assert_eq!(app.auth_form().role, Role::Employer);

        match handle_key(&mut app, &mut ui, press(KeyCode::Enter)) {
            Action::Send(message) => assert!(app.update(message).is_empty()),
            _ => panic!("expected submit"),
        }
        assert_eq!(app.view(), View::EmployerDashboard);
        assert!(rendered(&app, &ui).contains("Employer dashboard"));
    }

    #[test]
    fn test_candidate_keys() {
        let mut ui = UiState::default();
        assert!(matches!(
            handle_candidate_key(&mut ui, press(KeyCode::Char('3'))),
            Action::Send(Message::SelectTab(Tab::AiJobs))
        ));
        assert!(matches!(
            handle_candidate_key(&mut ui, press(KeyCode::Char('g'))),
            Action::Send(Message::RequestRecommendations)
        ));
        assert!(matches!(handle_candidate_key(&mut ui, press(KeyCode::Char('q'))), Action::Quit));
    }

    #[test]
    fn test_notice_captures_keys() {
        let (mut app, _) = App::start(MemoryStorage::new(), AppOptions::default());
        let mut ui = UiState::default();
        type_text(&mut app, &mut ui, "bad");
        if let Action::Send(message) = handle_key(&mut app, &mut ui, press(KeyCode::Enter)) {
            app.update(message);
        }
        assert!(app.notice().is_some());
        assert!(rendered(&app, &ui).contains("Notice"));

        assert!(matches!(handle_key(&mut app, &mut ui, press(KeyCode::Char('x'))), Action::None));
        assert_eq!(app.auth_form().email, "bad");
        assert!(matches!(
            handle_key(&mut app, &mut ui, press(KeyCode::Esc)),
            Action::Send(Message::DismissNotice)
        ));
    }

    /// Value shown in the first counter cell, under "Matching jobs".
    fn matching_jobs_cell(screen: &str) -> String {
        let rows: Vec<&str> = screen.lines().collect();
        let label_row = rows
            .iter()
            .position(|row| row.contains("Matching jobs"))
            .expect("overview counters rendered");
        rows[label_row + 1].split('│').nth(1).unwrap_or_default().trim().to_string()
    }

    #[test]
    fn test_overview_renders_listing_count() {
        let (mut app, _) = App::start(MemoryStorage::new(), AppOptions::default());
        app.auth_form_mut().email = "c@x.com".into();
        let effects = app.update(Message::SubmitAuth);
        let Some(Effect::FetchListings { mount }) = effects.first().cloned() else {
            panic!("expected listing fetch");
        };

        app.update(Message::ListingsLoaded {
            mount,
            result: Ok(Vec::new()),
        });
        let screen = rendered(&app, &UiState::default());
        assert!(screen.contains("Hello, c"));
        assert_eq!(matching_jobs_cell(&screen), "0");

        let listings = serde_json::from_str(r#"[{"title":"Rust dev"},{"title":"Data engineer"}]"#).unwrap();
        app.update(Message::ListingsLoaded {
            mount,
            result: Ok(listings),
        });
        let screen = rendered(&app, &UiState::default());
        assert_eq!(matching_jobs_cell(&screen), "2");
    }
}
