use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::keyboard::is_interrupt;
use crate::input::KeyEvent;

/// Handle one key press. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(&key) {
        return true;
    }
    let code = key.code;
    if keybinds::is_quit(&code) {
        return true;
    }
    if keybinds::is_esc(&code) {
        if app.side_panel.is_open() {
            app.side_panel.set_open(false);
        }
    } else if keybinds::is_toggle_side_panel(&code) {
        app.side_panel.toggle();
    } else if keybinds::is_down(&code) {
        app.next();
    } else if keybinds::is_up(&code) {
        app.previous();
    } else if keybinds::is_page_down(&code) {
        app.page_down();
    } else if keybinds::is_page_up(&code) {
        app.page_up();
    } else if keybinds::is_home(&code) {
        app.scroll_home();
    } else if keybinds::is_end(&code) {
        app.scroll_end();
    }
    false
}
