//! Values written into the inline `<script>`.

/// Quoted JavaScript string literal that cannot close the surrounding `<script>`.
pub fn js_string(input: &str) -> String {
    serde_json::Value::from(input)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Timer that navigates to `target` after `delay_ms`.
pub fn redirect_timer(target: &str, delay_ms: u64) -> String {
    format!(
        "setTimeout(function () {{ window.location.href = {}; }}, {});",
        js_string(target),
        delay_ms
    )
}
