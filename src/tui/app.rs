//! TUI application state and event handling.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::cli::output;
use crate::content::{Profile, Project};
use crate::typewriter::{Timing, Typewriter, TypewriterError};

use super::ui;

/// Caret blink cadence for the typewriter line.
const BLINK_RATE: Duration = Duration::from_millis(500);

/// Portfolio sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Name, typewriter headline, stats and links.
    Hero,
    /// Skill category grid.
    Skills,
    /// Project gallery with detail pane.
    Projects,
    /// Competitions and community work.
    Achievements,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
        }
    }

    /// The section after this one, wrapping.
    pub fn next(self) -> Section {
        let idx = Section::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Section::ALL[(idx + 1) % Section::ALL.len()]
    }

    /// The section before this one, wrapping.
    pub fn prev(self) -> Section {
        let idx = Section::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Section::ALL[(idx + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// TUI application state (separate from terminal for borrowing).
#[derive(Debug)]
pub struct AppState {
    /// The portfolio being rendered.
    pub profile: Profile,
    /// Currently active section.
    pub section: Section,
    /// Selected index into the displayed (featured-first) project list.
    pub selected_project: usize,
    /// Hero headline typewriter.
    pub typewriter: Typewriter,
    /// Whether the typewriter caret is currently shown.
    pub caret_visible: bool,
    /// Transient feedback line (clipboard results), cleared on next keypress.
    pub status_line: Option<String>,
    /// When the typewriter is due to advance.
    next_tick: Instant,
    /// When the caret last toggled.
    last_blink: Instant,
}

impl AppState {
    /// Build state for a profile. Fails if the profile has no hero phrases,
    /// before any terminal mode is touched.
    pub fn new(profile: Profile, timing: Timing) -> Result<Self, TypewriterError> {
        let typewriter = Typewriter::new(profile.hero_phrases.clone(), timing)?;
        let now = Instant::now();
        let next_tick = now + typewriter.delay();
        Ok(Self {
            profile,
            section: Section::Hero,
            selected_project: 0,
            typewriter,
            caret_visible: true,
            status_line: None,
            next_tick,
            last_blink: now,
        })
    }

    /// Projects in display order (featured first).
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.profile.projects_featured_first()
    }

    /// Move project selection down, clamped to the list.
    pub fn select_next_project(&mut self) {
        let count = self.profile.projects.len();
        if count > 0 && self.selected_project + 1 < count {
            self.selected_project += 1;
        }
    }

    /// Move project selection up.
    pub fn select_prev_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    /// Copy the most relevant link for the current section to the clipboard:
    /// the selected project's URL in the gallery, the first profile link
    /// elsewhere.
    pub fn copy_current_link(&mut self) {
        let url = match self.section {
            Section::Projects => self
                .visible_projects()
                .get(self.selected_project)
                .map(|p| p.link.clone()),
            _ => self.profile.links.first().map(|l| l.url.clone()),
        };

        let Some(url) = url else {
            self.status_line = Some("Nothing to copy".to_string());
            return;
        };

        self.status_line = Some(match output::copy_to_clipboard(&url) {
            Ok(()) => format!("Copied {url}"),
            Err(e) => format!("Clipboard unavailable: {e}"),
        });
    }

    /// Advance the typewriter and caret if their deadlines have passed.
    fn advance_animations(&mut self) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.typewriter.tick();
            // Re-arm from the machine's own phase delay; the next tick is
            // only scheduled after this one has updated state.
            self.next_tick = now + self.typewriter.delay();
        }
        if now.duration_since(self.last_blink) >= BLINK_RATE {
            self.caret_visible = !self.caret_visible;
            self.last_blink = now;
        }
    }

    /// How long the event loop may block before an animation is due.
    fn poll_timeout(&self) -> Duration {
        let now = Instant::now();
        let tick_in = self.next_tick.saturating_duration_since(now);
        let blink_in = (self.last_blink + BLINK_RATE).saturating_duration_since(now);
        tick_in.min(blink_in)
    }
}

/// TUI application: terminal handle plus state, with guarded teardown.
pub struct App {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    state: AppState,
}

impl App {
    /// Enter raw mode and the alternate screen, ready to run.
    pub fn new(state: AppState) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, state })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|f| ui::draw(f, state))?;

            if event::poll(self.state.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.status_line = None;
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                                self.state.section = self.state.section.next();
                            }
                            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                                self.state.section = self.state.section.prev();
                            }
                            KeyCode::Char('1') => self.state.section = Section::Hero,
                            KeyCode::Char('2') => self.state.section = Section::Skills,
                            KeyCode::Char('3') => self.state.section = Section::Projects,
                            KeyCode::Char('4') => self.state.section = Section::Achievements,
                            KeyCode::Down | KeyCode::Char('j') => {
                                if self.state.section == Section::Projects {
                                    self.state.select_next_project();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if self.state.section == Section::Projects {
                                    self.state.select_prev_project();
                                }
                            }
                            KeyCode::Char('c') => self.state.copy_current_link(),
                            _ => {}
                        }
                    }
                }
            }

            self.state.advance_animations();
        }

        Ok(())
    }

    /// Clean up and restore terminal.
    pub fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Profile::builtin(), Timing::default()).unwrap()
    }

    #[test]
    fn test_section_navigation_wraps() {
        assert_eq!(Section::Achievements.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Achievements);
        assert_eq!(Section::Hero.next(), Section::Skills);
    }

    #[test]
    fn test_state_rejects_profile_without_phrases() {
        let mut profile = Profile::builtin();
        profile.hero_phrases.clear();
        let result = AppState::new(profile, Timing::default());
        assert!(matches!(result, Err(TypewriterError::EmptyPhrases)));
    }

    #[test]
    fn test_project_selection_clamps() {
        let mut state = state();
        let count = state.profile.projects.len();
        for _ in 0..count * 2 {
            state.select_next_project();
        }
        assert_eq!(state.selected_project, count - 1);
        for _ in 0..count * 2 {
            state.select_prev_project();
        }
        assert_eq!(state.selected_project, 0);
    }

    #[test]
    fn test_visible_projects_lead_with_featured() {
        let state = state();
        assert!(state.visible_projects()[0].featured);
    }

    #[test]
    fn test_poll_timeout_never_exceeds_next_deadline() {
        let state = state();
        assert!(state.poll_timeout() <= state.typewriter.delay().min(BLINK_RATE));
    }
}
