//! Demo page: a selectable users table with sortable columns and a text
//! field below it. Selection changes are logged to `trellis-demo.log`.

mod data;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::prelude::*;
use trellis_dom::{apply_focus, Color, Edges, Element, Event, FocusState, Key, Size, Style, Terminal};

use data::{load_users, User};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("sample data: {0}")]
    Data(#[from] serde_json::Error),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let log_file = File::create("trellis-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("logger already initialized");

    let users = load_users()?;

    let columns = vec![
        Column::new("id", "ID", |u: &User| u.id.into())
            .sortable()
            .fixed(6),
        Column::new("name", "Name", |u: &User| u.name.as_str().into())
            .sortable()
            .flex(1),
        Column::new("email", "Email", |u: &User| u.email.as_str().into()).flex(2),
    ];

    let table = DataTable::with_rows(columns, users)
        .selectable(true)
        .on_row_select(|rows: &[User]| {
            let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
            log::info!("Selected rows: {names:?}");
        });

    let email = TextField::new()
        .label("Email")
        .placeholder("you@example.com")
        .helper_text("Used for notifications only")
        .error_message("Enter a valid email address");

    let theme = default_theme();
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();

    loop {
        let mut root = page(&table, &email, focus.focused());
        apply_focus(&mut root, focus.focused());
        term.render(&root, &theme)?;
        table.clear_dirty();
        email.clear_dirty();

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Char('q'),
                modifiers,
                target,
            } = event
            {
                let typing = target.as_deref() == Some(email.input_id().as_str());
                if modifiers.ctrl || (!typing && modifiers.none()) {
                    return Ok(());
                }
            }

            if let Some(table_event) = table.process_event(event) {
                if let TableEvent::SortChanged { column, order } = table_event {
                    log::info!("sorted by {column} ({order:?})");
                }
                continue;
            }

            if let Some(FieldEvent::Changed(value)) = email.process_event(event) {
                let valid = value.is_empty() || value.contains('@');
                email.set_invalid(!valid);
            }
        }
    }
}

fn page(table: &DataTable<User>, email: &TextField, focused: Option<&str>) -> Element {
    let email_focused = focused == Some(email.input_id().as_str());

    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .style(Style::new().background(Color::var("background")))
        .child(
            Element::text("Users Table")
                .id("title")
                .style(Style::new().foreground(Color::var("primary")).bold()),
        )
        .child(table.element())
        .child(email.element(email_focused))
        .child(
            Element::text("Tab moves focus · click a header to sort · q quits")
                .id("hint")
                .style(Style::new().foreground(Color::var("muted")).dim()),
        )
}
