//! Terminal rendering end to end: fake engine push → TestBackend buffer → click.
use std::sync::{Arc, Mutex};

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use engine_api::{
    Configuration, EngineClient, EngineError, HookError, Hooks, Item, SharedHooks, StateSnapshot,
    Startup, Stats,
};
use hud_frontend_cli::{CliConfig, CliFrontend, EventLoop, Outcome};
use hud_frontend_core::{FrontendConfig, HudShell, SeedSource};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tokio::sync::oneshot;

#[derive(Default)]
struct RecordingHooks {
    calls: Mutex<Vec<String>>,
}

impl Hooks for RecordingHooks {
    fn use_item(&self, slug: &str) -> Result<(), HookError> {
        self.calls.lock().unwrap().push(slug.to_string());
        Ok(())
    }
}

struct FakeEngine {
    hooks: Arc<RecordingHooks>,
    withhold_hooks: bool,
    config: Mutex<Option<Configuration>>,
    pending: Mutex<Option<oneshot::Sender<SharedHooks>>>,
}

impl FakeEngine {
    fn new(withhold_hooks: bool) -> Arc<Self> {
        Arc::new(Self {
            hooks: Arc::new(RecordingHooks::default()),
            withhold_hooks,
            config: Mutex::new(None),
            pending: Mutex::new(None),
        })
    }

    fn push(&self, snapshot: StateSnapshot) {
        self.config.lock().unwrap().as_ref().unwrap().push(snapshot);
    }

    fn calls(&self) -> Vec<String> {
        self.hooks.calls.lock().unwrap().clone()
    }
}

impl EngineClient for FakeEngine {
    fn start(&self, config: Configuration) -> Result<Startup, EngineError> {
        *self.config.lock().unwrap() = Some(config);
        if self.withhold_hooks {
            let (tx, rx) = oneshot::channel();
            *self.pending.lock().unwrap() = Some(tx);
            Ok(Startup::Pending(rx))
        } else {
            Ok(Startup::Ready(self.hooks.clone()))
        }
    }
}

fn welcome() -> StateSnapshot {
    StateSnapshot::from_json(
        r#"{
            "stats": {
                "health": {"current": 50, "max": 100},
                "gold": 10,
                "items": [{"name": "Potion", "amount": 2, "slug": "potion"}]
            },
            "notifications": ["Welcome"]
        }"#,
    )
    .unwrap()
}

fn mounted(engine: Arc<FakeEngine>) -> EventLoop {
    let frontend_config = FrontendConfig::new(SeedSource::Fixed(9), false);
    let frontend = CliFrontend::new(CliConfig::default());
    let surfaces = frontend.surfaces();

    let mut shell = HudShell::new(engine, &frontend_config);
    shell.mount(surfaces.clone());

    EventLoop::new(shell, surfaces, CliConfig::default())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn locate(text: &str, needle: &str) -> Option<(u16, u16)> {
    text.lines().enumerate().find_map(|(row, line)| {
        line.find(needle)
            .map(|byte| (line[..byte].chars().count() as u16, row as u16))
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> TermEvent {
    TermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn left_click(column: u16, row: u16) -> TermEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn press(code: KeyCode) -> TermEvent {
    TermEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// `count` items named `Relic 01`, `Relic 02`, ... with slugs `relic-01`, ...
fn relics(count: usize) -> StateSnapshot {
    let items = (1..=count)
        .map(|n| Item::new(format!("Relic {n:02}"), 1.0, format!("relic-{n:02}")))
        .collect();
    StateSnapshot::new().with_stats(Stats::new().with_items(items))
}

fn notes(count: usize) -> StateSnapshot {
    StateSnapshot::new().with_notifications((1..=count).map(|n| format!("note {n:02}")))
}

#[test]
fn pushed_snapshot_renders_every_section() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    let health = event_loop.shell().view().health.unwrap();
    assert_eq!(health.percentage, 50.0);
    assert!(text.contains("50/100"));
    assert!(text.contains("Gold: 10"));
    assert!(text.contains("Potion"));
    assert!(text.contains("Welcome"));

    let (_, potion_row) = locate(&text, "Potion").unwrap();
    let row_text = text.lines().nth(potion_row as usize).unwrap();
    assert!(row_text.trim_end().trim_end_matches('│').trim_end().ends_with('2'));
}

#[test]
fn clicking_an_item_row_uses_it_once() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();
    let (column, row) = locate(&buffer_text(terminal.backend().buffer()), "Potion").unwrap();

    assert_eq!(event_loop.handle_event(left_click(column, row)), Outcome::Redraw);
    assert_eq!(engine.calls(), vec!["potion".to_string()]);

    // the engine has not answered, so the amount is unchanged
    event_loop.render(&mut terminal).unwrap();
    assert_eq!(event_loop.shell().view().items.unwrap()[0].amount, 2.0);
}

#[test]
fn clicking_outside_item_rows_does_nothing() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();

    assert_eq!(event_loop.handle_event(left_click(0, 0)), Outcome::Continue);
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn clicking_before_hooks_arrive_is_silent() {
    let engine = FakeEngine::new(true);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();
    let (column, row) = locate(&buffer_text(terminal.backend().buffer()), "Potion").unwrap();

    event_loop.handle_event(left_click(column, row));
    assert!(engine.calls().is_empty());
}

#[test]
fn latest_snapshot_replaces_earlier_one_on_screen() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(StateSnapshot::from_json(r#"{"notifications": ["first burst"]}"#).unwrap());
    engine.push(StateSnapshot::from_json(r#"{"notifications": ["second burst"]}"#).unwrap());
    event_loop.render(&mut terminal).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("second burst"));
    assert!(!text.contains("first burst"));
}

#[test]
fn every_item_is_clickable_on_an_80x24_terminal() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    engine.push(
        StateSnapshot::new()
            .with_stats(
                Stats::new()
                    .with_health(30.0, 40.0)
                    .with_gold(5.0)
                    .with_items(vec![
                        Item::new("Potion", 2.0, "potion"),
                        Item::new("Scroll", 1.0, "scroll"),
                        Item::new("Lantern", 1.0, "lantern"),
                    ]),
            )
            .with_notifications(["Welcome"]),
    );
    event_loop.render(&mut terminal).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("30/40"));
    assert!(text.contains("Gold: 5"));
    for name in ["Potion", "Scroll", "Lantern"] {
        let (column, row) = locate(&text, name).unwrap();
        assert_eq!(event_loop.handle_event(left_click(column, row)), Outcome::Redraw);
    }
    assert_eq!(engine.calls(), vec!["potion", "scroll", "lantern"]);
}

#[test]
fn long_inventory_scrolls_with_the_selection() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    engine.push(relics(12));
    event_loop.render(&mut terminal).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Relic 01"));
    assert!(!text.contains("Relic 12"));

    let downs = std::iter::repeat_with(|| press(KeyCode::Down)).take(12);
    assert!(!event_loop.handle_events(&mut terminal, downs).unwrap());
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Relic 12"));

    let (column, row) = locate(&text, "Relic 12").unwrap();
    event_loop.handle_event(left_click(column, row));
    assert_eq!(engine.calls(), vec!["relic-12"]);
}

#[test]
fn older_notifications_are_reachable_by_scrolling() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    engine.push(notes(20));
    event_loop.render(&mut terminal).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("note 20"));
    assert!(!text.contains("note 01"));

    // wheel over the feed, one line at a time, until the oldest entry shows
    let (column, row) = locate(&text, "note 20").unwrap();
    let mut seen: Vec<String> = Vec::new();
    for _ in 0..20 {
        let text = buffer_text(terminal.backend().buffer());
        seen.extend(
            (1..=20)
                .map(|n| format!("note {n:02}"))
                .filter(|note| text.contains(note.as_str())),
        );
        event_loop
            .handle_events(&mut terminal, [mouse(MouseEventKind::ScrollUp, column, row)])
            .unwrap();
    }
    for n in 1..=20 {
        assert!(seen.contains(&format!("note {n:02}")), "note {n:02} never shown");
    }

    // paging back down returns to the newest entries
    let pages = std::iter::repeat_with(|| press(KeyCode::PageDown)).take(4);
    event_loop.handle_events(&mut terminal, pages).unwrap();
    assert_eq!(event_loop.app_state().notification_scroll, 0);
    assert!(buffer_text(terminal.backend().buffer()).contains("note 20"));
}

#[test]
fn click_behind_a_burst_of_mouse_motion_lands_in_the_same_tick() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();
    let (column, row) = locate(&buffer_text(terminal.backend().buffer()), "Potion").unwrap();

    let mut batch: Vec<TermEvent> = (0..200)
        .map(|step| mouse(MouseEventKind::Moved, step % 80, step % 40))
        .collect();
    batch.push(left_click(column, row));

    assert!(!event_loop.handle_events(&mut terminal, batch).unwrap());
    assert_eq!(engine.calls(), vec!["potion".to_string()]);
}

#[test]
fn click_after_a_scrolling_key_resolves_against_the_new_layout() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    engine.push(relics(12));
    event_loop.render(&mut terminal).unwrap();
    let (column, top_row) =
        locate(&buffer_text(terminal.backend().buffer()), "Relic 01").unwrap();

    // eleven downs select Relic 11 and scroll the 8-row window to start at Relic 04
    let mut batch: Vec<TermEvent> = std::iter::repeat_with(|| press(KeyCode::Down))
        .take(11)
        .collect();
    batch.push(left_click(column, top_row));

    event_loop.handle_events(&mut terminal, batch).unwrap();
    assert_eq!(engine.calls(), vec!["relic-04"]);
}

#[test]
fn quit_in_a_batch_stops_processing() {
    let engine = FakeEngine::new(false);
    let mut event_loop = mounted(engine.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 42)).unwrap();

    engine.push(welcome());
    event_loop.render(&mut terminal).unwrap();

    let batch = [press(KeyCode::Char('q')), press(KeyCode::Char('1'))];
    assert!(event_loop.handle_events(&mut terminal, batch).unwrap());
    assert!(engine.calls().is_empty());
}
