//! Interactive browse session
//!
//! A single-screen loop over the rune cache. Rendering a route touches
//! the cache, the cache schedules fetches for what it is missing, and
//! arriving envelopes re-render the current route through the bound
//! change listener. The typeahead box at the top samples the live input
//! after the settle delay and drops answers to superseded queries.
//!
//! Keys: `/` edits the search box, arrows move the selection, Enter
//! opens the selected hit, `f` flips the card, `e` and `c` toggle the
//! expansion and faction panels, Escape backs out, `q` quits.

use std::sync::Arc;

use colored::Colorize;
use console::{Key, Term};
use tokio::sync::{Notify, mpsc};
use tokio::time::{self, Instant};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::models::{Faction, Id, SearchTarget};
use crate::client::{PoxBaseApi, PoxBaseClient};
use crate::db::RuneDb;
use crate::error::{Error, Result};
use crate::models::display::styled_hit;
use crate::models::{AbilityGroupDetail, RuneSheet};
use crate::output::{label, table};
use crate::search::{DEBOUNCE, Overlay, OverlayCoordinator, Sample, SearchBox};

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    Champ(Id),
    Spell(Id),
    Equip(Id),
    Relic(Id),
    Ability(Id),
}

/// What a handled key asks the loop to do
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    /// The live input changed; restart the settle timer
    InputEdited,
    Quit,
}

/// State of one browse session
struct BrowseSession {
    db: RuneDb,
    search: SearchBox,
    overlays: OverlayCoordinator,
    route: Route,
    flipped: bool,
    typing: bool,
    input: String,
    status: Option<String>,
}

impl BrowseSession {
    fn new(db: RuneDb) -> Self {
        Self {
            db,
            search: SearchBox::new(),
            overlays: OverlayCoordinator::new(),
            route: Route::Home,
            flipped: false,
            typing: false,
            input: String::new(),
            status: None,
        }
    }

    /// Apply one keypress to the session state.
    fn handle_key(&mut self, key: Key) -> KeyOutcome {
        self.status = None;

        match key {
            Key::Char('q') if !self.typing => return KeyOutcome::Quit,
            Key::Char('f') if !self.typing => self.flipped = !self.flipped,
            Key::Char('/') if !self.typing => self.typing = true,
            Key::Char('e') if !self.typing => {
                self.overlays.toggle(Overlay::Expansions);
            }
            Key::Char('c') if !self.typing => {
                self.overlays.toggle(Overlay::Factions);
            }
            Key::Char(c) if self.typing && !c.is_control() => {
                self.input.push(c);
                return KeyOutcome::InputEdited;
            }
            Key::Backspace if self.typing => {
                self.input.pop();
                return KeyOutcome::InputEdited;
            }
            Key::ArrowDown => self.search.step(1, &mut self.overlays),
            Key::ArrowUp => self.search.step(-1, &mut self.overlays),
            Key::Enter => {
                self.typing = false;
                if let Some(hit) = self.search.enter(&mut self.overlays).cloned() {
                    match route_for(&hit.target) {
                        Some(route) => {
                            self.route = route;
                            self.flipped = false;
                        }
                        None => {
                            self.status =
                                Some(format!("No detail view for {}", hit.target.label()));
                        }
                    }
                }
            }
            Key::Escape => {
                if self.typing {
                    self.typing = false;
                    self.search.escape(&mut self.overlays);
                } else if self.overlays.displayed().is_some() {
                    self.overlays.dismiss();
                } else {
                    self.route = Route::Home;
                    self.flipped = false;
                }
            }
            _ => {}
        }

        KeyOutcome::Continue
    }

    /// Render the whole screen for the current state.
    fn screen(&mut self) -> String {
        let mut screen = String::new();
        screen.push_str(&self.header());
        screen.push_str(&self.panel());
        screen.push_str(&self.body());
        screen.push_str(&self.footer());
        screen
    }

    fn header(&self) -> String {
        let cursor = if self.typing { "▌" } else { "" };
        format!(
            "{}\nSearch: {}{}\n\n",
            "Poxdex".cyan().bold(),
            self.input,
            cursor
        )
    }

    /// The open overlay, if any. At most one renders at a time.
    fn panel(&self) -> String {
        match self.overlays.displayed() {
            Some(Overlay::Typeahead) => self.typeahead_panel(),
            Some(Overlay::Expansions) => self.expansions_panel(),
            Some(Overlay::Factions) => factions_panel(),
            None => String::new(),
        }
    }

    fn typeahead_panel(&self) -> String {
        let matcher = self.search.matcher();
        let mut out = String::new();

        for (index, hit) in self.search.results().iter().enumerate() {
            let marker = if self.search.selected() == Some(index) {
                ">"
            } else {
                " "
            };
            out.push_str(&format!("{} {}\n", marker, styled_hit(hit, &matcher)));
        }
        out.push('\n');
        out
    }

    fn expansions_panel(&self) -> String {
        let mut out = section_rule("Expansions");

        if self.db.expansions().is_empty() {
            out.push_str(&format!("{}\n", "Not loaded yet".dimmed()));
        }
        for expansion in self.db.expansions() {
            out.push_str(&format!("  {:>2}  {}\n", expansion.id, expansion.name));
        }
        out.push('\n');
        out
    }

    fn body(&mut self) -> String {
        if self.route != Route::Home && !self.db.ready() {
            return loading_line("index");
        }

        match self.route {
            Route::Home => self.home_body(),
            Route::Champ(id) => match self.db.champion(id).cloned() {
                Some(champ) => {
                    let sheet =
                        RuneSheet::champion(&champ, champ.defaults[0], champ.defaults[1], &self.db);
                    format!("{}\n", sheet.render(self.flipped))
                }
                None => loading_line(&format!("champion {id}")),
            },
            Route::Spell(id) => match self.db.spell(id).cloned() {
                Some(spell) => {
                    let sheet = RuneSheet::spell(&spell, &self.db);
                    format!("{}\n", sheet.render(self.flipped))
                }
                None => loading_line(&format!("spell {id}")),
            },
            Route::Equip(id) => match self.db.equip(id).cloned() {
                Some(equip) => {
                    let sheet = RuneSheet::equip(&equip, &self.db);
                    format!("{}\n", sheet.render(self.flipped))
                }
                None => loading_line(&format!("equipment {id}")),
            },
            Route::Relic(id) => match self.db.relic(id).cloned() {
                Some(relic) => {
                    let sheet = RuneSheet::relic(&relic, &self.db);
                    format!("{}\n", sheet.render(self.flipped))
                }
                None => loading_line(&format!("relic {id}")),
            },
            Route::Ability(id) => match self.db.ability_group(id).cloned() {
                Some(group) => {
                    let detail = AbilityGroupDetail::new(&group, &self.db);
                    format!(
                        "{}\n{}\n",
                        detail.format_header(),
                        table::format_table(&detail.ranks)
                    )
                }
                None => loading_line(&format!("ability {id}")),
            },
        }
    }

    fn home_body(&self) -> String {
        let mut out = String::new();

        if !self.db.ready() {
            out.push_str(&loading_line("index"));
            return out;
        }

        let stats = self.db.stats();
        out.push_str(&format!(
            "{} expansions indexed, {} entities cached this session\n\n",
            stats.expansions,
            stats.resolved_total()
        ));
        out.push_str("Type / and a name to search the rune index.\n");
        out
    }

    fn footer(&self) -> String {
        let mut out = String::new();

        if let Some(ref status) = self.status {
            out.push_str(&format!("\n{}\n", status.yellow()));
        }

        let help = if self.typing {
            "type to search   arrows select   Enter open   Esc done"
        } else {
            "/ search   f flip   e expansions   c factions   Esc back   q quit"
        };
        out.push_str(&format!("\n{}\n", help.dimmed()));
        out
    }
}

/// The session route a hit opens, when it has one
fn route_for(target: &SearchTarget) -> Option<Route> {
    match target {
        SearchTarget::Champion(id) => Some(Route::Champ(*id)),
        SearchTarget::Spell(id) => Some(Route::Spell(*id)),
        SearchTarget::Equip(id) => Some(Route::Equip(*id)),
        SearchTarget::Relic(id) => Some(Route::Relic(*id)),
        SearchTarget::AbilityGroup(id) => Some(Route::Ability(*id)),
        SearchTarget::Race(_)
        | SearchTarget::Effect(_)
        | SearchTarget::Condition(_)
        | SearchTarget::Damage(_) => None,
    }
}

fn factions_panel() -> String {
    let mut out = section_rule("Factions");

    for faction in Faction::ALL {
        out.push_str(&format!(
            "  {}  {}\n",
            faction.short(),
            label::faction_label(faction)
        ));
    }
    out.push('\n');
    out
}

fn section_rule(title: &str) -> String {
    format!("─── {title} ───\n")
}

fn loading_line(what: &str) -> String {
    format!("{}\n", format!("Loading {what}...").dimmed())
}

/// Run the browse command
pub async fn run(options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options)?;

    let term = Term::stdout();
    if !term.is_term() {
        return Err(Error::Other(
            "Browse needs an interactive terminal".to_string(),
        ));
    }

    let CommandContext { client, db, .. } = context;
    run_session(term, Arc::new(client), db).await
}

async fn run_session(term: Term, client: Arc<PoxBaseClient>, db: RuneDb) -> Result<()> {
    let mut session = BrowseSession::new(db);

    // Re-render whenever an applied envelope changes the cache.
    let notify = Arc::new(Notify::new());
    let on_change = Arc::clone(&notify);
    session.db.bind(Box::new(move || on_change.notify_one()));

    let (key_tx, mut key_rx) = mpsc::channel::<Key>(32);
    let reader = term.clone();
    std::thread::spawn(move || {
        while let Ok(key) = reader.read_key() {
            if key_tx.blocking_send(key).is_err() {
                break;
            }
        }
    });

    let (fetch_tx, mut fetch_rx) = mpsc::channel(16);
    let (hits_tx, mut hits_rx) =
        mpsc::channel::<(String, Result<crate::client::models::TypeaheadResponse>)>(8);

    term.hide_cursor()?;

    let mut deadline: Option<Instant> = None;

    loop {
        term.clear_screen()?;
        term.write_str(&session.screen())?;

        // Rendering may have scheduled fetches for missing entities.
        for request in session.db.take_scheduled() {
            let client = Arc::clone(&client);
            let results = fetch_tx.clone();
            tokio::spawn(async move {
                let result = request.perform(client.as_ref()).await;
                let _ = results.send((request, result)).await;
            });
        }

        let settle_at = deadline;
        let settle = async move {
            match settle_at {
                Some(at) => time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            Some(key) = key_rx.recv() => match session.handle_key(key) {
                KeyOutcome::Quit => break,
                KeyOutcome::InputEdited => deadline = Some(Instant::now() + DEBOUNCE),
                KeyOutcome::Continue => {}
            },
            Some((request, result)) = fetch_rx.recv() => {
                if result.is_err() {
                    session.status = Some(format!("Fetch for {request} failed; entry stays pending"));
                }
                session.db.apply_fetched(&request, result);
            }
            Some((snapshot, result)) = hits_rx.recv() => match result {
                Ok(response) => {
                    session.search.apply_results(
                        &snapshot,
                        response.results,
                        &mut session.overlays,
                    );
                }
                Err(err) => log::warn!("Typeahead for {snapshot:?} failed: {err}"),
            },
            _ = settle => {
                deadline = None;
                if let Sample::Fetch(snapshot) =
                    session.search.sample(&session.input, &mut session.overlays)
                {
                    let client = Arc::clone(&client);
                    let answers = hits_tx.clone();
                    tokio::spawn(async move {
                        let result = client.typeahead(&snapshot).await;
                        let _ = answers.send((snapshot, result)).await;
                    });
                }
            }
            _ = notify.notified() => {}
        }
    }

    session.db.unbind();
    term.clear_screen()?;
    term.show_cursor()?;

    Ok(())
}
