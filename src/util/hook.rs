use crate::ui::tui;
use tracing::error;

/// Restore the terminal before the default hook prints, and keep a copy of
/// the panic in the log file since the alternate screen is gone by then.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        error!("panic: {panic_info}");
        hook(panic_info);
    }));
}
