use crossterm::event::KeyCode;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves a list cursor for the usual navigation keys. Returns `None` for
/// keys that are not navigation.
pub const fn navigate(key: KeyCode, index: usize, len: usize) -> Option<usize> {
    const PAGE: usize = 5;
    if len == 0 {
        return match key {
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => Some(0),
            _ => None,
        };
    }
    let last = len - 1;
    match key {
        KeyCode::Up => Some(index.saturating_sub(1)),
        KeyCode::Down => Some(if index < last { index + 1 } else { last }),
        KeyCode::PageUp => Some(index.saturating_sub(PAGE)),
        KeyCode::PageDown => Some(if index + PAGE < last { index + PAGE } else { last }),
        KeyCode::Home => Some(0),
        KeyCode::End => Some(last),
        _ => None,
    }
}

/// Applies a typing key to a text buffer. Returns whether the key was consumed.
pub fn edit_text(buffer: &mut String, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(ch) => {
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}

/// Steps through a fixed list of labels, starting from the current one.
pub fn cycle_choice(options: &[&str], current: &str, forward: bool) -> String {
    let position = options.iter().position(|option| *option == current);
    let next = match (position, forward) {
        (None, _) => 0,
        (Some(index), true) => wrap_increment(index, options.len()),
        (Some(index), false) => wrap_decrement(index, options.len()),
    };
    options
        .get(next)
        .map_or_else(String::new, |option| (*option).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_stays_in_bounds() {
        assert_eq!(navigate(KeyCode::Down, 2, 3), Some(2));
        assert_eq!(navigate(KeyCode::Up, 0, 3), Some(0));
        assert_eq!(navigate(KeyCode::PageDown, 1, 4), Some(3));
        assert_eq!(navigate(KeyCode::End, 0, 0), None);
        assert_eq!(navigate(KeyCode::Char('x'), 0, 3), None);
    }

    #[test]
    fn choices_wrap_both_ways() {
        let options = ["Notícia", "Evento Realizado"];
        assert_eq!(cycle_choice(&options, "Evento Realizado", true), "Notícia");
        assert_eq!(cycle_choice(&options, "Notícia", false), "Evento Realizado");
        assert_eq!(cycle_choice(&options, "???", true), "Notícia");
    }

    #[test]
    fn text_editing_handles_backspace() {
        let mut buffer = String::from("ab");
        assert!(edit_text(&mut buffer, KeyCode::Backspace));
        assert!(edit_text(&mut buffer, KeyCode::Char('ç')));
        assert!(!edit_text(&mut buffer, KeyCode::Enter));
        assert_eq!(buffer, "aç");
    }
}
