//! Event loop.
//!
//! Every iteration we fetch if it is time to, draw the whole screen, check for a key and
//! sleep a bit.  Everything happens in this thread; a fetch blocks the display for at most
//! its timeout.
//!

use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use eyre::Result;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use tracing::{info, trace};

use skywatch_sources::{Fetchable, OwnerRegistry};

use crate::config::Context;
use crate::display::Board;
use crate::tracker::Tracker;

/// Pause between two iterations
pub const TICK: Duration = Duration::from_millis(100);

/// Key to exit
pub const QUIT: char = 'q';

/// Should this key stop the program?
///
/// Raw mode swallows SIGINT so Ctrl-C is handled here as well.
///
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char(QUIT) => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Everything the loop needs.
///
#[derive(Debug)]
pub struct App<'a> {
    ctx: &'a Context,
    src: &'a dyn Fetchable,
    registry: &'a OwnerRegistry,
    tracker: Tracker,
}

impl<'a> App<'a> {
    pub fn new(ctx: &'a Context, src: &'a dyn Fetchable, registry: &'a OwnerRegistry) -> Self {
        App {
            ctx,
            src,
            registry,
            tracker: Tracker::new(ctx.refresh, ctx.proximity),
        }
    }

    /// Fetch if needed then draw one screen.
    ///
    pub fn frame<B: Backend>(&mut self, terminal: &mut Terminal<B>, now: Instant) -> Result<()> {
        self.tracker
            .tick(self.src, self.registry, &self.ctx.reference, now);

        let tracker = &self.tracker;
        terminal.draw(|f| f.render_widget(Board::new(tracker, Local::now()), f.area()))?;
        Ok(())
    }

    /// Run until the quit key is pressed.
    ///
    #[tracing::instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.frame(terminal, Instant::now())?;

            // Non-blocking
            //
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    trace!("key={key:?}");
                    if is_quit(&key) {
                        break;
                    }
                }
            }
            thread::sleep(TICK);
        }
        info!("Exiting, {} aircraft seen.", self.tracker.seen());
        Ok(())
    }
}

/// Take over the terminal, run the loop and restore the terminal whatever happened.
///
#[tracing::instrument(skip(ctx, src, registry))]
pub fn watch(ctx: &Context, src: &dyn Fetchable, registry: &OwnerRegistry) -> Result<()> {
    info!("Watching {} from {}", ctx.url, ctx.reference.home);

    let mut terminal = ratatui::try_init()?;
    let res = App::new(ctx, src, registry).run(&mut terminal);
    ratatui::try_restore()?;
    res
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::KeyEventState;

    use skywatch_common::{Location, Units};
    use skywatch_sources::{OwnerColumns, Reference};

    use super::*;
    use crate::tracker::tests::{tracked, Replay};

    fn context() -> Context {
        Context {
            reference: Reference {
                home: Location::new(0., 0.),
                units: Units::Miles,
                radius: 15.,
            },
            proximity: 5.,
            refresh: Duration::from_secs(5),
            url: "http://localhost/aircraft.json".to_string(),
            timeout: Duration::from_secs(5),
            owners: PathBuf::from("master.csv"),
            owner_columns: OwnerColumns::default(),
            log_file: PathBuf::from("skywatch.log"),
        }
    }

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
        assert!(!is_quit(&key(KeyCode::Esc, KeyModifiers::NONE)));

        let mut release = key(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!is_quit(&release));
    }

    #[test]
    fn test_frame_refresh_and_stale() -> Result<()> {
        let ctx = context();
        let reg = OwnerRegistry::default();
        let src = Replay::new(vec![
            Some(vec![tracked(Some("BBBBBB"), 8.), tracked(Some("AAAAAA"), 2.)]),
            None,
        ]);
        let mut app = App::new(&ctx, &src, &reg);
        let mut terminal = Terminal::new(TestBackend::new(160, 20))?;

        let start = Instant::now();
        app.frame(&mut terminal, start)?;
        let s = screen(&terminal);
        assert!(s[6].contains("AAAAAA") && s[6].contains("YES"));
        assert!(s[7].contains("BBBBBB") && !s[7].contains("YES"));
        assert!(s[9].starts_with("Total Unique Aircraft Tracked: 2"));

        // Not due yet, same display
        app.frame(&mut terminal, start + Duration::from_secs(1))?;
        assert!(screen(&terminal)[6].contains("AAAAAA"));

        // Failed fetch empties the list but the count stays
        app.frame(&mut terminal, start + Duration::from_secs(5))?;
        let s = screen(&terminal);
        assert!(s[6].starts_with("+---"));
        assert!(s[7].starts_with("Total Unique Aircraft Tracked: 2"));
        Ok(())
    }

    #[test]
    fn test_frame_resize() -> Result<()> {
        let ctx = context();
        let reg = OwnerRegistry::default();
        let list = (0..20).map(|i| tracked(Some(&format!("{i:06}")), 1. + i as f64)).collect();
        let src = Replay::new(vec![Some(list)]);
        let mut app = App::new(&ctx, &src, &reg);
        let mut terminal = Terminal::new(TestBackend::new(160, 30))?;

        app.frame(&mut terminal, Instant::now())?;
        assert!(screen(&terminal)[25].contains("000019"));

        terminal.backend_mut().resize(40, 10);
        app.frame(&mut terminal, Instant::now())?;
        let s = screen(&terminal);
        assert_eq!(10, s.len());
        assert!(s[7].contains("000001"));
        assert!(s[9].starts_with("Total Unique Aircraft Tra"));
        Ok(())
    }
}
