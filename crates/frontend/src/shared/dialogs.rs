/// Show a blocking browser alert.
///
/// Falls back to the console when there is no window (or the alert was
/// suppressed by the container).
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .map(|w| w.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        log::warn!("alert not shown: {}", message);
    }
}
