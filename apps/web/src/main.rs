use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use ratzilla::event::{KeyCode, KeyEvent};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

mod fetch;
mod pages;
mod site;

use site::{Effect, Key, Site};

fn main() -> io::Result<()> {
    let site = Rc::new(RefCell::new(Site::new(&current_hash())));

    spawn_local({
        let site = site.clone();
        async move {
            let result = fetch::fetch_site().await;
            if let Err(error) = &result {
                web_sys::console::error_1(&format!("Failed to load site.json: {error}").into());
            }
            site.borrow_mut().set_export(result);
        }
    });

    listen_for_hash_changes(site.clone());

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let site = site.clone();
        move |event| {
            let Some(key) = map_key(&event) else {
                return;
            };
            let effect = site.borrow_mut().handle_key(key, now());
            if let Some(effect) = effect {
                apply(&site, effect);
            }
        }
    });

    terminal.draw_web(move |f| {
        pages::render(&mut site.borrow_mut(), f);
    });

    Ok(())
}

fn map_key(event: &KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab if event.shift => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Backspace,
        _ => return None,
    };
    Some(key)
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn apply(site: &Rc<RefCell<Site>>, effect: Effect) {
    match effect {
        Effect::SetHash(hash) => {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(error) = window.location().set_hash(&hash) {
                web_sys::console::warn_1(&error);
            }
        }
        Effect::PostPrayer { endpoint, request } => {
            let site = site.clone();
            spawn_local(async move {
                let result = fetch::post_prayer(&endpoint, &request).await;
                site.borrow_mut().prayer_sent(result);
            });
        }
    }
}

/// Back/forward buttons and typed URLs reach the site through `hashchange`.
fn listen_for_hash_changes(site: Rc<RefCell<Site>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(move || {
        site.borrow_mut().sync_hash(&current_hash());
    });
    if let Err(error) =
        window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
    {
        web_sys::console::warn_1(&error);
    }
    callback.forget();
}
